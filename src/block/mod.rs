//! Per-block decoders, one module per format, plus [`decode_block`], the
//! single dispatch point every format but PVRTC1 goes through.
//!
//! PVRTC1 ([`pvrtc`]) has no per-block decode function: its bilinear blend
//! needs the whole image's blocks, not just one, so it is decoded through
//! [`pvrtc::PvrtcImage`] directly rather than through [`decode_block`].

pub mod bc1;
pub mod bc3;
pub mod bc4;
pub mod bc5;
pub mod bc7;
pub mod eac;
pub mod etc1;
pub mod etc2_rgba;
pub mod pvrtc;

use crate::format::Format;
use crate::pixel::Tile;

/// Decode one block of `fmt` from `payload` into `dest`.
///
/// Multi-channel formats overwrite `dest` entirely. Single-channel formats
/// (`Bc4`, `Etc2Alpha`) write only their own channel (red, alpha
/// respectively) and leave the rest of `dest` as the caller left it — this
/// is how [`bc3`] and [`etc2_rgba`] compose a color block with a separately
/// decoded channel, and it lets a caller seed `dest` with whatever default
/// they want for a channel this format doesn't touch.
///
/// Returns `false` when the block's bits describe something this format
/// forbids or doesn't support (BC1/BC3 punch-through on a profile that
/// disallows it, a non-mode-6 BC7 block, or a PVRTC1 format — which has no
/// per-block decode of its own). `dest` is still populated best-effort in
/// that case.
///
/// # Panics
///
/// Panics if `payload.len()` does not equal `fmt.bytes_per_block()`.
pub fn decode_block(fmt: Format, payload: &[u8], dest: &mut Tile) -> bool {
    assert_eq!(
        payload.len(),
        fmt.bytes_per_block(),
        "payload length does not match {fmt:?}'s block size"
    );

    log::trace!("decode_block: {fmt:?}, {} byte payload", payload.len());

    let ok = match fmt {
        Format::Bc1 => {
            let block: [u8; 8] = payload.try_into().unwrap();
            let punch_through = bc1::decode_rgb_into(&block, dest);
            !punch_through
        }
        Format::Bc3 => {
            let block: [u8; 16] = payload.try_into().unwrap();
            let (tile, ok) = bc3::decode(&block);
            *dest = tile;
            ok
        }
        Format::Bc4 => {
            let block: [u8; 8] = payload.try_into().unwrap();
            bc4::decode_into(&block, dest, bc4::Channel::R);
            true
        }
        Format::Bc5 => {
            let block: [u8; 16] = payload.try_into().unwrap();
            *dest = bc5::decode(&block);
            true
        }
        Format::Bc7 => {
            let block: [u8; 16] = payload.try_into().unwrap();
            let (tile, ok) = bc7::decode(&block);
            *dest = tile;
            ok
        }
        Format::Etc1 | Format::Etc1S | Format::Etc2Rgb => {
            let block: [u8; 8] = payload.try_into().unwrap();
            *dest = etc1::decode(&block);
            true
        }
        Format::Etc2Rgba => {
            let block: [u8; 16] = payload.try_into().unwrap();
            *dest = etc2_rgba::decode(&block);
            true
        }
        Format::Etc2Alpha => {
            let block: [u8; 8] = payload.try_into().unwrap();
            let alpha = eac::decode(&block);
            for (pixel, &a) in dest.iter_mut().zip(alpha.iter()) {
                pixel.a = a;
            }
            true
        }
        Format::Pvrtc1_4Rgb | Format::Pvrtc1_4Rgba => {
            *dest = crate::pixel::opaque_black_tile();
            false
        }
    };

    if !ok {
        log::warn!("decode_block: {fmt:?} block rejected, dest populated best-effort");
    }

    ok
}
