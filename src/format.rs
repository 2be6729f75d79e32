//! The closed set of block formats this crate can decode and/or container-write,
//! and the per-format layout tables every other module dispatches through.

/// A compressed GPU texture block format.
///
/// This is the closed tagged-variant the spec calls for: every block decoder
/// and the container writer's internal-format table dispatch on this enum,
/// and there is no runtime extension point (an unrecognized format is a
/// `Format::try_from` failure at the edge, not a new enum variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// BC1 / DXT1: RGB, or RGB + 1-bit punch-through alpha.
    Bc1,
    /// BC3 / DXT5: BC4 alpha block + BC1 color block.
    Bc3,
    /// BC4: single-channel, 8 endpoints + 3-bit selectors.
    Bc4,
    /// BC5: two independent BC4 channels (R, G).
    Bc5,
    /// BC7 mode 6 only (see [`crate::block::bc7`]).
    Bc7,
    /// ETC1 color block.
    Etc1,
    /// ETC1S: byte-identical to ETC1, distinguished only for pipeline bookkeeping.
    Etc1S,
    /// ETC2 RGB (decoded via the ETC1 color-block path only; planar/T/H unsupported).
    Etc2Rgb,
    /// ETC2 RGBA: EAC alpha block + ETC1 color block.
    Etc2Rgba,
    /// ETC2-EAC single-channel alpha block, decoded alone.
    Etc2Alpha,
    /// PVRTC1, 4 bits per pixel, RGB.
    Pvrtc1_4Rgb,
    /// PVRTC1, 4 bits per pixel, RGBA.
    Pvrtc1_4Rgba,
}

impl Format {
    /// Size in bytes of one compressed block of this format.
    pub const fn bytes_per_block(self) -> usize {
        match self {
            Format::Bc1
            | Format::Bc4
            | Format::Etc1
            | Format::Etc1S
            | Format::Etc2Rgb
            | Format::Etc2Alpha
            | Format::Pvrtc1_4Rgb
            | Format::Pvrtc1_4Rgba => 8,
            Format::Bc3 | Format::Bc5 | Format::Bc7 | Format::Etc2Rgba => 16,
        }
    }

    /// Block dimensions in texels. Every in-scope format uses 4×4 blocks.
    pub const fn block_dimensions(self) -> (u32, u32) {
        (4, 4)
    }

    /// `true` if this format carries per-pixel alpha of its own (as opposed
    /// to always-opaque or caller-composited alpha).
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Format::Bc3 | Format::Bc5 | Format::Bc7 | Format::Etc2Rgba | Format::Pvrtc1_4Rgba
        )
    }
}

/// `(glInternalFormat, glBaseInternalFormat)` for the container header, per §4.4.
///
/// Returns `None` for formats with no defined container representation
/// (currently just [`Format::Etc2Alpha`], which the spec's table omits: EAC
/// alpha is only ever container-written as half of [`Format::Etc2Rgba`]).
pub const fn gl_internal_formats(format: Format) -> Option<(u32, u32)> {
    const GL_RED: u32 = 0x1903;
    const GL_RGB: u32 = 0x1907;
    const GL_RGBA: u32 = 0x1908;
    const GL_RG: u32 = 0x8227;

    const GL_COMPRESSED_RGB_S3TC_DXT1_EXT: u32 = 0x83F0;
    const GL_COMPRESSED_RGBA_S3TC_DXT5_EXT: u32 = 0x83F3;
    const GL_COMPRESSED_RED_RGTC1_EXT: u32 = 0x8DBB;
    const GL_COMPRESSED_RED_GREEN_RGTC2_EXT: u32 = 0x8DBD;
    const GL_COMPRESSED_RGBA_BPTC_UNORM_ARB: u32 = 0x8E8C;
    const GL_ETC1_RGB8_OES: u32 = 0x8D64;
    const GL_COMPRESSED_RGB8_ETC2: u32 = 0x9274;
    const GL_COMPRESSED_RGBA8_ETC2_EAC: u32 = 0x9278;
    const GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG: u32 = 0x8C00;
    const GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG: u32 = 0x8C02;

    Some(match format {
        Format::Bc1 => (GL_COMPRESSED_RGB_S3TC_DXT1_EXT, GL_RGB),
        Format::Bc3 => (GL_COMPRESSED_RGBA_S3TC_DXT5_EXT, GL_RGBA),
        Format::Bc4 => (GL_COMPRESSED_RED_RGTC1_EXT, GL_RED),
        Format::Bc5 => (GL_COMPRESSED_RED_GREEN_RGTC2_EXT, GL_RG),
        Format::Bc7 => (GL_COMPRESSED_RGBA_BPTC_UNORM_ARB, GL_RGBA),
        Format::Etc1 | Format::Etc1S => (GL_ETC1_RGB8_OES, GL_RGB),
        Format::Etc2Rgb => (GL_COMPRESSED_RGB8_ETC2, GL_RGB),
        Format::Etc2Rgba => (GL_COMPRESSED_RGBA8_ETC2_EAC, GL_RGBA),
        Format::Pvrtc1_4Rgb => (GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG, GL_RGB),
        Format::Pvrtc1_4Rgba => (GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG, GL_RGBA),
        Format::Etc2Alpha => return None,
    })
}
