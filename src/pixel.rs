//! CPU-side pixel type shared by every block decoder.

use bytemuck::{Pod, Zeroable};

/// A 4-channel 8-bit color value, channel order (r, g, b, a).
///
/// Channels are independent; alpha defaults to opaque (255) for formats that
/// carry no alpha data of their own. `Pixel` is `Pod`/`Zeroable` so a
/// `&[Pixel]` tile can be reinterpreted as `&[u8]` for zero-copy upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Pixel {
    /// Opaque black, the default fill for destination tiles (§6: "callers may
    /// pass a 16-pixel buffer pre-filled with opaque black").
    pub const OPAQUE_BLACK: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Fully transparent black, used for BC1 punch-through alpha index 3.
    pub const TRANSPARENT_BLACK: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Construct a pixel from four channels already known to be in `0..=255`.
    ///
    /// No clamping is performed; use [`Pixel::from_clamped`] for values that
    /// may fall outside that range (e.g. interpolated BC4/EAC intermediates).
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a pixel, saturating each signed 32-bit channel to `0..=255`.
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_to_u8(r),
            g: clamp_to_u8(g),
            b: clamp_to_u8(b),
            a: clamp_to_u8(a),
        }
    }

    /// Return a copy of this pixel with the RGB channels replaced, alpha kept.
    #[inline]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: self.a }
    }
}

impl Default for Pixel {
    /// Opaque black — the convention every decoder's caller-supplied
    /// destination buffer is expected to be pre-filled with.
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

/// Saturate a signed 32-bit value to the `0..=255` range of a `u8`.
///
/// All BC4/BC5/EAC interpolation arithmetic uses 32-bit signed intermediates
/// and clamps on store through this helper.
#[inline]
pub fn clamp_to_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// A 4×4 tile of decoded pixels, row-major (`tile[y * 4 + x]`).
pub type Tile = [Pixel; 16];

/// A tile pre-filled with opaque black, the standard starting point for a
/// decode destined to be partially overwritten by a single-channel format.
#[inline]
pub fn opaque_black_tile() -> Tile {
    [Pixel::OPAQUE_BLACK; 16]
}
