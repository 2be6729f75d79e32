//! A KTX-like mip-chain container: write a [`Texture`] to bytes, and read it
//! back.

pub mod image;
pub mod reader;
pub mod writer;

pub use image::{GpuImage, MipChain, Texture};
pub use reader::read;
pub use writer::write;
