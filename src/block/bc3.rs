//! BC3 (DXT5): BC4-style alpha block followed by a BC1 color block. 16 bytes per block.

use crate::block::{bc1, bc4};
use crate::pixel::{opaque_black_tile, Tile};

/// Decode a 16-byte BC3 block. Returns `ok = false` (BC3 forbids this
/// subcase on some hardware) if the embedded color block used BC1's
/// punch-through (three-color) mode; the tile is still populated best-effort.
pub fn decode(payload: &[u8; 16]) -> (Tile, bool) {
    let mut tile = opaque_black_tile();

    let alpha_block: [u8; 8] = payload[0..8].try_into().unwrap();
    bc4::decode_into(&alpha_block, &mut tile, bc4::Channel::A);

    let color_block: [u8; 8] = payload[8..16].try_into().unwrap();
    let punch_through = bc1::decode_rgb_into(&color_block, &mut tile);

    (tile, !punch_through)
}
