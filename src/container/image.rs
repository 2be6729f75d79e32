//! In-memory representation of a texture ready for container writing (or
//! produced by container reading): one format, one or more mip levels, one
//! or more array/cubemap slices.

use crate::format::Format;

/// One mip level's already-encoded block payload, plus the pixel dimensions
/// it was encoded at (before block-rounding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Compressed block data, row-major, no padding between blocks.
    pub payload: Vec<u8>,
}

impl GpuImage {
    /// Construct a level from its pixel dimensions and block payload.
    pub fn new(width: u32, height: u32, payload: Vec<u8>) -> Self {
        GpuImage {
            width,
            height,
            payload,
        }
    }

    /// Number of blocks across this level's width, under `format`'s block grid.
    pub fn blocks_x(&self, format: Format) -> usize {
        let (block_w, _) = format.block_dimensions();
        (self.width as usize).div_ceil(block_w as usize)
    }

    /// Number of blocks down this level's height, under `format`'s block grid.
    pub fn blocks_y(&self, format: Format) -> usize {
        let (_, block_h) = format.block_dimensions();
        (self.height as usize).div_ceil(block_h as usize)
    }

    /// Total block count (`blocks_x * blocks_y`) under `format`'s block grid.
    pub fn total_blocks(&self, format: Format) -> usize {
        self.blocks_x(format) * self.blocks_y(format)
    }

    /// Expected payload length in bytes: `total_blocks * format.bytes_per_block()`.
    pub fn size_in_bytes(&self, format: Format) -> usize {
        self.total_blocks(format) * format.bytes_per_block()
    }
}

/// One array/cubemap slice: a format and its full mip chain, base level first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipChain {
    /// The block format every level in this chain is encoded in.
    pub format: Format,
    /// Mip levels, base (largest) first.
    pub levels: Vec<GpuImage>,
}

impl MipChain {
    /// Width of the base (level 0) mip.
    pub fn base_width(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.width)
    }

    /// Height of the base (level 0) mip.
    pub fn base_height(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.height)
    }
}

/// A full texture: one or more [`MipChain`] slices (array elements, or the
/// six faces of a cubemap array) sharing format, base dimensions, and level
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Each array element (or, for a cubemap, each of the 6 faces times
    /// however many array elements).
    pub slices: Vec<MipChain>,
    /// Whether `slices` represents a cubemap (face count must then be a
    /// multiple of 6).
    pub cubemap: bool,
}

impl Texture {
    /// A texture with a single slice and no array/cubemap structure.
    pub fn single(chain: MipChain) -> Self {
        Texture {
            slices: vec![chain],
            cubemap: false,
        }
    }
}

/// `max(1, base >> level)`, the expected dimension of a mip level.
pub fn mip_dimension(base: u32, level: usize) -> u32 {
    (base >> level).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_accessors_round_up_partial_blocks() {
        let image = GpuImage::new(10, 6, vec![0u8; 24 * 8]);
        assert_eq!(image.blocks_x(Format::Bc1), 3); // ceil(10/4)
        assert_eq!(image.blocks_y(Format::Bc1), 2); // ceil(6/4)
        assert_eq!(image.total_blocks(Format::Bc1), 6);
        assert_eq!(image.size_in_bytes(Format::Bc1), 48);
    }

    #[test]
    fn size_in_bytes_scales_with_bytes_per_block() {
        let image = GpuImage::new(4, 4, vec![0u8; 16]);
        assert_eq!(image.size_in_bytes(Format::Bc3), 16);
        assert_eq!(image.size_in_bytes(Format::Bc1), 8);
    }
}
