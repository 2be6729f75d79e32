//! BC5: two independent BC4 channels (R, then G). 16 bytes per block.

use crate::block::bc4::{self, Channel};
use crate::pixel::{opaque_black_tile, Tile};

/// Decode a 16-byte BC5 block: the first 8 bytes decode into R, the second
/// 8 bytes into G.
pub fn decode(payload: &[u8; 16]) -> Tile {
    let mut tile = opaque_black_tile();
    let r_block: [u8; 8] = payload[0..8].try_into().unwrap();
    let g_block: [u8; 8] = payload[8..16].try_into().unwrap();
    bc4::decode_into(&r_block, &mut tile, Channel::R);
    bc4::decode_into(&g_block, &mut tile, Channel::G);
    tile
}
