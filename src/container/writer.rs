//! Writes a [`Texture`] out as a KTX-like container: a 12-byte magic, a
//! 64-byte header of packed little-endian `u32` fields, zero bytes of
//! key/value metadata, and then each mip level as a 4-byte `imageSize`
//! followed by that many bytes of concatenated slice payloads.

use crate::container::image::{mip_dimension, Texture};
use crate::error::ContainerError;
use crate::format::gl_internal_formats;

/// The 12-byte magic every container file starts with.
pub const MAGIC: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// The endianness marker a little-endian writer emits; a reader that finds
/// anything else knows it is holding a byte-swapped (big-endian) file.
pub const LITTLE_ENDIAN_MARKER: u32 = 0x0403_0201;

const GL_UNSIGNED_BYTE: u32 = 0;
const GL_TYPE_SIZE_COMPRESSED: u32 = 1;
const GL_FORMAT_COMPRESSED: u32 = 0;

/// Validate and serialize `texture` into a container file's bytes.
///
/// Returns an error instead of any output at all if `texture` does not
/// describe a valid, consistent mip chain — see [`ContainerError`]'s
/// variants for exactly what is checked.
pub fn write(texture: &Texture) -> Result<Vec<u8>, ContainerError> {
    log::debug!(
        "container::write: {} slice(s), cubemap={}",
        texture.slices.len(),
        texture.cubemap
    );

    validate(texture)?;

    let base_slice = &texture.slices[0];
    let (gl_internal_format, gl_base_internal_format) = gl_internal_formats(base_slice.format)
        .ok_or(ContainerError::UnrepresentableFormat(base_slice.format))?;

    let level_count = base_slice.levels.len();
    let face_count = if texture.cubemap { 6 } else { 1 };
    let array_element_count = if texture.cubemap {
        texture.slices.len() / 6
    } else {
        texture.slices.len()
    };

    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);

    let header_fields: [u32; 13] = [
        LITTLE_ENDIAN_MARKER,
        GL_UNSIGNED_BYTE,
        GL_TYPE_SIZE_COMPRESSED,
        GL_FORMAT_COMPRESSED,
        gl_internal_format,
        gl_base_internal_format,
        base_slice.base_width(),
        base_slice.base_height(),
        0, // pixelDepth: this crate only writes 2D / cubemap / array-of-2D textures
        if texture.cubemap || array_element_count > 1 {
            array_element_count as u32
        } else {
            0
        },
        face_count as u32,
        level_count as u32,
        0, // bytesOfKeyValueData
    ];
    for field in header_fields {
        out.extend_from_slice(&field.to_le_bytes());
    }

    for level in 0..level_count {
        let mut level_payload = Vec::new();
        for slice in &texture.slices {
            level_payload.extend_from_slice(&slice.levels[level].payload);
        }
        let image_size = level_payload.len() as u32;
        out.extend_from_slice(&image_size.to_le_bytes());
        out.extend_from_slice(&level_payload);
    }

    Ok(out)
}

fn validate(texture: &Texture) -> Result<(), ContainerError> {
    let err = validate_inner(texture);
    if let Err(ref e) = err {
        log::warn!("container::write: refusing to write, {e}");
    }
    err
}

fn validate_inner(texture: &Texture) -> Result<(), ContainerError> {
    if texture.slices.is_empty() || texture.slices[0].levels.is_empty() {
        return Err(ContainerError::EmptyMipChain);
    }

    if texture.cubemap && texture.slices.len() % 6 != 0 {
        return Err(ContainerError::CubemapSliceCountNotMultipleOfSix(
            texture.slices.len(),
        ));
    }

    let base = &texture.slices[0];
    let base_width = base.base_width();
    let base_height = base.base_height();
    let base_level_count = base.levels.len();

    for (slice_index, slice) in texture.slices.iter().enumerate().skip(1) {
        if slice.format != base.format
            || slice.base_width() != base_width
            || slice.base_height() != base_height
            || slice.levels.len() != base_level_count
        {
            return Err(ContainerError::InconsistentArraySlice {
                slice: slice_index,
            });
        }
    }

    for slice in &texture.slices {
        for (level_index, image) in slice.levels.iter().enumerate() {
            let expected_w = mip_dimension(base_width, level_index);
            let expected_h = mip_dimension(base_height, level_index);
            if image.width != expected_w || image.height != expected_h {
                return Err(ContainerError::WrongLevelDimensions {
                    level: level_index,
                    expected_w,
                    expected_h,
                    actual_w: image.width,
                    actual_h: image.height,
                });
            }

            let expected_len = image.size_in_bytes(base.format);
            if image.payload.len() != expected_len {
                return Err(ContainerError::WrongPayloadLength {
                    level: level_index,
                    expected: expected_len,
                    actual: image.payload.len(),
                });
            }
        }
    }

    for level_index in 0..base_level_count {
        let total: usize = texture
            .slices
            .iter()
            .map(|slice| slice.levels[level_index].payload.len())
            .sum();
        if total % 4 != 0 {
            return Err(ContainerError::ImageSizeNotMultipleOfFour {
                level: level_index,
                size: total as u32,
            });
        }
    }

    Ok(())
}
