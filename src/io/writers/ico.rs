use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use tracing::debug;

use crate::core::processing::resize::{calculate_square_fit_dimensions, resize_rgba_image};
use crate::error::{Error, Result};

/// Icon sizes embedded in an `.ico`, smallest first.
pub const ICO_FRAME_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Frame sizes that fit inside a `width x height` image.
pub fn ico_frame_sizes(width: u32, height: u32) -> Vec<u32> {
    ICO_FRAME_SIZES
        .iter()
        .copied()
        .filter(|&size| size <= width && size <= height)
        .collect()
}

/// Render every frame of the icon as RGBA, largest frame equal to `img` when it fits.
pub fn ico_frames(img: &RgbaImage) -> Result<Vec<RgbaImage>> {
    let (width, height) = img.dimensions();
    let sizes = ico_frame_sizes(width, height);
    if sizes.is_empty() {
        return Ok(vec![img.clone()]);
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for size in sizes {
        if width == size && height == size {
            frames.push(img.clone());
            continue;
        }
        let (frame_width, frame_height) = calculate_square_fit_dimensions(width, height, size)?;
        frames.push(resize_rgba_image(img, frame_width, frame_height)?);
    }
    Ok(frames)
}

/// Write a multi-resolution `.ico` with PNG-compressed frames.
pub fn write_ico(output: &Path, img: &RgbaImage) -> Result<()> {
    let frames = ico_frames(img)?;

    let encoded = frames
        .iter()
        .map(|frame| {
            debug!("ICO frame {}x{}", frame.width(), frame.height());
            IcoFrame::as_png(
                frame.as_raw(),
                frame.width(),
                frame.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let file = File::create(output).map_err(|e| Error::ImageSave {
        path: output.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    let writer = BufWriter::new(file);
    IcoEncoder::new(writer)
        .encode_images(&encoded)
        .map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })
}
