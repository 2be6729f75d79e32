//! Error types.
//!
//! Per the spec's error design (§7), the block decoders and IDCT kernels
//! never return `Result`: a block decode failure is a boolean `ok` flag and
//! the destination tile is still populated best-effort. The container writer
//! is the crate's one `Result`-returning surface, since its failures are
//! configuration mistakes the caller should be able to match on and report,
//! not per-pixel noise.

use thiserror::Error;

/// Why [`crate::container::write`] refused to produce a container file.
///
/// This is a "configuration failure" in the spec's sense (§7): the writer
/// detected the mip chain it was handed does not describe a valid texture,
/// and produced no output at all rather than emitting partial bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerError {
    /// The mip chain (or every array slice) was empty.
    #[error("mip chain must have at least one level")]
    EmptyMipChain,

    /// `cubemap` was set but the number of array slices was not a multiple of 6.
    #[error("cubemap array must have a slice count that is a multiple of 6, got {0}")]
    CubemapSliceCountNotMultipleOfSix(usize),

    /// Two array slices disagree on format, base dimensions, or level count.
    #[error("array slice {slice} does not match slice 0's format/dimensions/level count")]
    InconsistentArraySlice {
        /// Index of the offending slice.
        slice: usize,
    },

    /// A mip level's dimensions do not equal `max(1, base >> level)`.
    #[error(
        "level {level} has dimensions {actual_w}x{actual_h}, expected {expected_w}x{expected_h}"
    )]
    WrongLevelDimensions {
        /// Mip level index.
        level: usize,
        /// Expected width at this level.
        expected_w: u32,
        /// Expected height at this level.
        expected_h: u32,
        /// Width actually present on the level's `GpuImage`.
        actual_w: u32,
        /// Height actually present on the level's `GpuImage`.
        actual_h: u32,
    },

    /// A level's payload length didn't match `blocks_x * blocks_y * bytes_per_block`.
    #[error("level {level} payload is {actual} bytes, expected {expected}")]
    WrongPayloadLength {
        /// Mip level index.
        level: usize,
        /// Expected payload length in bytes.
        expected: usize,
        /// Actual payload length in bytes.
        actual: usize,
    },

    /// A level's total image size (across all faces/slices) was not a multiple of 4.
    #[error("level {level} imageSize {size} is not a multiple of 4")]
    ImageSizeNotMultipleOfFour {
        /// Mip level index.
        level: usize,
        /// The computed (non-conformant) imageSize.
        size: u32,
    },

    /// The format has no defined container (glInternalFormat) representation.
    #[error("format {0:?} has no container representation")]
    UnrepresentableFormat(crate::format::Format),
}

/// Why [`crate::container::read`] refused to parse a byte buffer as a container file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadError {
    /// The buffer was shorter than the fixed 64-byte header.
    #[error("buffer is {0} bytes, shorter than the 64-byte header")]
    TooShortForHeader(usize),

    /// The 12-byte magic identifier did not match.
    #[error("magic identifier mismatch")]
    BadMagic,

    /// The endianness marker was not `0x04030201` (big-endian files are not supported).
    #[error("unsupported endianness marker {0:#010x}")]
    UnsupportedEndianness(u32),

    /// `glInternalFormat` in the header did not match any known format.
    #[error("unrecognized glInternalFormat {0:#06x}")]
    UnrecognizedInternalFormat(u32),

    /// The buffer ended in the middle of a declared level's data.
    #[error("level {level} declares {declared} bytes but only {available} remain")]
    TruncatedLevel {
        /// Mip level index.
        level: usize,
        /// Bytes the level's `imageSize` field declared.
        declared: usize,
        /// Bytes actually remaining in the buffer.
        available: usize,
    },

    /// A level's declared `imageSize` did not match the size computed from
    /// the header's dimensions and format (`blocks_x * blocks_y * bytes_per_block`,
    /// times the face/slice count).
    #[error("level {level} imageSize {declared} does not match computed size {computed}")]
    ImageSizeMismatch {
        /// Mip level index.
        level: usize,
        /// Bytes the level's `imageSize` field declared.
        declared: usize,
        /// Bytes computed from header dimensions and format.
        computed: usize,
    },
}
