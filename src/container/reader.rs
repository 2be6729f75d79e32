//! Reads back container files produced by [`crate::container::writer::write`].
//!
//! Not part of the distributed-codec's external contract in the way the
//! block decoders and writer are — this exists so the writer's output can be
//! round-tripped and checked in tests without a second implementation to
//! compare against.

use crate::container::image::{GpuImage, MipChain, Texture};
use crate::container::writer::{LITTLE_ENDIAN_MARKER, MAGIC};
use crate::error::ReadError;
use crate::format::{gl_internal_formats, Format};

const HEADER_LEN: usize = 64;

const ALL_FORMATS: [Format; 12] = [
    Format::Bc1,
    Format::Bc3,
    Format::Bc4,
    Format::Bc5,
    Format::Bc7,
    Format::Etc1,
    Format::Etc1S,
    Format::Etc2Rgb,
    Format::Etc2Rgba,
    Format::Etc2Alpha,
    Format::Pvrtc1_4Rgb,
    Format::Pvrtc1_4Rgba,
];

fn format_from_gl_internal(value: u32) -> Option<Format> {
    ALL_FORMATS
        .into_iter()
        .find(|&fmt| gl_internal_formats(fmt).is_some_and(|(internal, _)| internal == value))
}

/// Parse a container file's bytes back into a [`Texture`].
///
/// The texture this returns always has `slices.len() == numberOfArrayElements.max(1)
/// * numberOfFaces`; the caller is responsible for reinterpreting that as a
/// cubemap (`numberOfFaces == 6`) if it cares.
pub fn read(bytes: &[u8]) -> Result<Texture, ReadError> {
    if bytes.len() < 12 + HEADER_LEN {
        return Err(ReadError::TooShortForHeader(bytes.len()));
    }
    if bytes[0..12] != MAGIC {
        return Err(ReadError::BadMagic);
    }

    let field = |index: usize| -> u32 {
        let offset = 12 + index * 4;
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    };

    let endianness = field(0);
    if endianness != LITTLE_ENDIAN_MARKER {
        return Err(ReadError::UnsupportedEndianness(endianness));
    }

    let gl_internal_format = field(4);
    let format = format_from_gl_internal(gl_internal_format)
        .ok_or(ReadError::UnrecognizedInternalFormat(gl_internal_format))?;

    let pixel_width = field(6);
    let pixel_height = field(7);
    let number_of_array_elements = field(9);
    let number_of_faces = field(10);
    let number_of_mipmap_levels = field(11);
    let bytes_of_key_value_data = field(12);

    let array_elements = number_of_array_elements.max(1) as usize;
    let faces = number_of_faces.max(1) as usize;
    let slice_count = array_elements * faces;
    let level_count = number_of_mipmap_levels.max(1) as usize;

    let mut cursor = 12 + HEADER_LEN + bytes_of_key_value_data as usize;

    let bytes_per_block = format.bytes_per_block();
    let (block_w, block_h) = format.block_dimensions();

    let mut per_slice_levels: Vec<Vec<GpuImage>> = vec![Vec::with_capacity(level_count); slice_count];

    for level in 0..level_count {
        if cursor + 4 > bytes.len() {
            return Err(ReadError::TruncatedLevel {
                level,
                declared: 4,
                available: bytes.len().saturating_sub(cursor),
            });
        }
        let declared = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().unwrap()) as usize;
        cursor += 4;

        let level_w = (pixel_width >> level).max(1);
        let level_h = (pixel_height >> level).max(1);
        let blocks_x = (level_w as usize).div_ceil(block_w as usize);
        let blocks_y = (level_h as usize).div_ceil(block_h as usize);
        let per_slice_len = blocks_x * blocks_y * bytes_per_block;
        let computed = per_slice_len * slice_count;

        if declared != computed {
            return Err(ReadError::ImageSizeMismatch {
                level,
                declared,
                computed,
            });
        }
        if cursor + declared > bytes.len() {
            return Err(ReadError::TruncatedLevel {
                level,
                declared,
                available: bytes.len() - cursor,
            });
        }

        for (slice_index, slice_levels) in per_slice_levels.iter_mut().enumerate() {
            let start = cursor + slice_index * per_slice_len;
            let payload = bytes[start..start + per_slice_len].to_vec();
            slice_levels.push(GpuImage::new(level_w, level_h, payload));
        }
        cursor += declared;
    }

    let slices = per_slice_levels
        .into_iter()
        .map(|levels| MipChain { format, levels })
        .collect();

    Ok(Texture {
        slices,
        cubemap: faces == 6,
    })
}
