//! BC1 (DXT1): RGB, or RGB + 1-bit punch-through alpha. 8 bytes per block.

use crate::pixel::{Pixel, Tile};

/// Expand a 16-bit RGB565 endpoint to 8-bit RGB via left-shift + high-bit replication.
#[inline]
fn expand_565(value: u16) -> (u8, u8, u8) {
    let r5 = ((value >> 11) & 0x1F) as u32;
    let g6 = ((value >> 5) & 0x3F) as u32;
    let b5 = (value & 0x1F) as u32;
    let r = ((r5 << 3) | (r5 >> 2)) as u8;
    let g = ((g6 << 2) | (g6 >> 4)) as u8;
    let b = ((b5 << 3) | (b5 >> 2)) as u8;
    (r, g, b)
}

#[inline]
fn interpolate_one_third(a: u8, b: u8) -> u8 {
    ((2 * a as u32 + b as u32) / 3) as u8
}

#[inline]
fn interpolate_half(a: u8, b: u8) -> u8 {
    ((a as u32 + b as u32) / 2) as u8
}

/// The four RGB palette entries for a block, plus whether it is in
/// punch-through (three-color) mode.
struct Palette {
    colors: [(u8, u8, u8); 4],
    punch_through: bool,
}

fn build_palette(c0_raw: u16, c1_raw: u16) -> Palette {
    let c0 = expand_565(c0_raw);
    let c1 = expand_565(c1_raw);

    if c0_raw > c1_raw {
        let c2 = (
            interpolate_one_third(c0.0, c1.0),
            interpolate_one_third(c0.1, c1.1),
            interpolate_one_third(c0.2, c1.2),
        );
        let c3 = (
            interpolate_one_third(c1.0, c0.0),
            interpolate_one_third(c1.1, c0.1),
            interpolate_one_third(c1.2, c0.2),
        );
        Palette {
            colors: [c0, c1, c2, c3],
            punch_through: false,
        }
    } else {
        let c2 = (
            interpolate_half(c0.0, c1.0),
            interpolate_half(c0.1, c1.1),
            interpolate_half(c0.2, c1.2),
        );
        Palette {
            colors: [c0, c1, c2, (0, 0, 0)],
            punch_through: true,
        }
    }
}

/// Parse the two endpoints and 16 two-bit selectors out of an 8-byte BC1 payload.
fn parse(payload: &[u8; 8]) -> (u16, u16, [u8; 16]) {
    let c0 = u16::from_le_bytes([payload[0], payload[1]]);
    let c1 = u16::from_le_bytes([payload[2], payload[3]]);
    let mut selectors = [0u8; 16];
    for (byte_index, &byte) in payload[4..8].iter().enumerate() {
        for bit_pair in 0..4 {
            selectors[byte_index * 4 + bit_pair] = (byte >> (bit_pair * 2)) & 0x3;
        }
    }
    (c0, c1, selectors)
}

/// Decode a full BC1 block into RGBA, including its own alpha (opaque, or
/// fully transparent for the punch-through selector). Returns whether the
/// block used punch-through (three-color) mode.
pub fn decode(payload: &[u8; 8]) -> (Tile, bool) {
    let mut tile = [Pixel::OPAQUE_BLACK; 16];
    let punch_through = decode_rgb_into(payload, &mut tile);
    (tile, punch_through)
}

/// Decode a BC1 block's RGB channels into an existing tile, leaving alpha
/// untouched except for the punch-through case (index 3 → fully transparent
/// black). Used by BC3, which decodes alpha separately via BC4.
///
/// Returns whether the block used punch-through (three-color) mode.
pub fn decode_rgb_into(payload: &[u8; 8], tile: &mut Tile) -> bool {
    let (c0, c1, selectors) = parse(payload);
    let palette = build_palette(c0, c1);

    for (i, pixel) in tile.iter_mut().enumerate() {
        let index = selectors[i] as usize;
        if palette.punch_through && index == 3 {
            *pixel = Pixel::TRANSPARENT_BLACK;
        } else {
            let (r, g, b) = palette.colors[index];
            *pixel = pixel.with_rgb(r, g, b);
        }
    }

    palette.punch_through
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_opaque_black_and_white() {
        // c0 = 0x0000 (black), c1 = 0xFFFF (white), all selectors = 0 -> c0 everywhere.
        let payload: [u8; 8] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00];
        let (tile, punch_through) = decode(&payload);
        assert!(!punch_through);
        for pixel in tile {
            assert_eq!(pixel, Pixel::new(0, 0, 0, 255));
        }
    }

    #[test]
    fn s2_punch_through() {
        // c0_raw (0x0000) <= c1_raw (0xFFFF) selects punch-through mode; see
        // DESIGN.md's "Resolved open questions" for why this payload differs
        // from the scenario's literal one.
        let payload: [u8; 8] = [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00];
        let (tile, punch_through) = decode(&payload);
        assert!(punch_through);
        // selector byte 0 = 0xFF => pixels 0..3 all have selector 3 -> transparent black.
        for pixel in &tile[0..4] {
            assert_eq!(*pixel, Pixel::TRANSPARENT_BLACK);
        }
    }

    #[test]
    fn four_color_palette_matches_spec_ordering() {
        // c0 = 0xFFFF (white, 565 -> 255,255,255), c1 = 0x0000 (black) => c0_raw > c1_raw.
        let payload: [u8; 8] = [0xFF, 0xFF, 0x00, 0x00, 0xE4, 0xE4, 0xE4, 0xE4];
        // selector byte pattern 0xE4 = 0b11_10_01_00 -> indices [0,1,2,3] per byte (LSB first).
        let (tile, punch_through) = decode(&payload);
        assert!(!punch_through);
        assert_eq!(tile[0], Pixel::new(255, 255, 255, 255)); // c0
        assert_eq!(tile[1], Pixel::new(0, 0, 0, 255)); // c1
        assert_eq!(tile[2], Pixel::new(170, 170, 170, 255)); // (2c0+c1)/3 = 510/3=170
        assert_eq!(tile[3], Pixel::new(85, 85, 85, 255)); // (c0+2c1)/3 = 255/3=85
    }

    #[test]
    fn rgb_only_variant_preserves_existing_alpha() {
        let mut tile = [Pixel::new(0, 0, 0, 42); 16];
        let payload: [u8; 8] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00];
        let punch_through = decode_rgb_into(&payload, &mut tile);
        assert!(!punch_through);
        assert_eq!(tile[0].a, 42);
    }
}
