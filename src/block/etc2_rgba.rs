//! ETC2 RGBA: EAC alpha block followed by an ETC1 color block. 16 bytes per block.

use crate::block::{eac, etc1};
use crate::pixel::Tile;

/// Decode a 16-byte ETC2 RGBA block: the first 8 bytes are an EAC alpha
/// block, the second 8 bytes an ETC1 color block.
pub fn decode(payload: &[u8; 16]) -> Tile {
    let alpha_block: [u8; 8] = payload[0..8].try_into().unwrap();
    let color_block: [u8; 8] = payload[8..16].try_into().unwrap();

    let alpha = eac::decode(&alpha_block);
    let mut tile = etc1::decode(&color_block);

    for (pixel, &a) in tile.iter_mut().zip(alpha.iter()) {
        pixel.a = a;
    }

    tile
}
