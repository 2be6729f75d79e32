//! # texcodec-core
//!
//! Core of a GPU texture codec system: block-level decoders for fixed-size
//! compressed texture blocks, the orthonormal 1D IDCT family used by HDR
//! transcoding, and the mip-chain container writer/reader.
//!
//! The crate is organized leaves-first:
//!
//! - [`pixel`] — the 4-channel 8-bit [`pixel::Pixel`] value every decoder writes into.
//! - [`format`] — the closed [`format::Format`] tag and its per-format block layout tables.
//! - [`block`] — one pure decode function per supported format, plus [`block::decode_block`].
//! - [`idct`] — the orthonormal inverse DCT-III kernels, sizes 2 through 12.
//! - [`container`] — the mip-chain container writer and reader.
//!
//! Every decoder and IDCT kernel is a pure, allocation-free function: no
//! locks, no hidden state, safe to call concurrently on disjoint inputs from
//! any number of threads. The container writer is the crate's one fallible,
//! `Result`-returning surface internally; everything else follows the
//! boolean-return contract the format describes (see [`error`]).

#![warn(missing_docs)]

pub mod block;
pub mod container;
pub mod error;
pub mod format;
pub mod idct;
pub mod pixel;

pub use error::ContainerError;
pub use format::Format;
pub use pixel::Pixel;
