use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

fn check_source(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::EmptySource { width, height });
    }
    Ok(())
}

fn check_target(width: u32, height: u32, target: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(Error::DegenerateSize {
            width,
            height,
            target,
        });
    }
    Ok((width, height))
}

/// Width for an image scaled to `target_height`, truncated toward zero.
pub fn calculate_aspect_dimensions(
    original_width: u32,
    original_height: u32,
    target_height: u32,
) -> Result<(u32, u32)> {
    if target_height == 0 {
        return Err(Error::ZeroSize { size: 0 });
    }
    check_source(original_width, original_height)?;

    let aspect_ratio = original_width as f64 / original_height as f64;
    let new_width = (target_height as f64 * aspect_ratio) as u32;

    check_target(new_width, target_height, target_height)
}

/// Dimensions that fit inside a `target_size` square with the aspect ratio kept.
///
/// Landscape sources pin the width; square and portrait sources pin the height.
pub fn calculate_square_fit_dimensions(
    original_width: u32,
    original_height: u32,
    target_size: u32,
) -> Result<(u32, u32)> {
    if target_size == 0 {
        return Err(Error::ZeroSize { size: 0 });
    }
    check_source(original_width, original_height)?;

    let aspect_ratio = original_width as f64 / original_height as f64;
    let (new_width, new_height) = if aspect_ratio > 1.0 {
        (target_size, (target_size as f64 / aspect_ratio) as u32)
    } else {
        ((target_size as f64 * aspect_ratio) as u32, target_size)
    };

    check_target(new_width, new_height, target_size)
}

/// Lanczos3 resample of an RGBA image to exact dimensions.
pub fn resize_rgba_image(src: &RgbaImage, target_width: u32, target_height: u32) -> Result<RgbaImage> {
    let (original_width, original_height) = src.dimensions();
    check_source(original_width, original_height)?;
    check_target(target_width, target_height, target_width.max(target_height))?;

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_width,
        original_height,
        src.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    debug!(
        "Resampled {}x{} -> {}x{}",
        original_width, original_height, target_width, target_height
    );

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Resize(format!(
            "resized buffer does not match {}x{}",
            target_width, target_height
        ))
    })
}

/// Scale an image to exactly `target_height`, deriving the width from its aspect ratio.
pub fn resize_to_height(src: &RgbaImage, target_height: u32) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    let (new_width, new_height) = calculate_aspect_dimensions(width, height, target_height)?;

    info!(
        "Aspect resize: {}x{} -> {}x{}",
        width, height, new_width, new_height
    );

    resize_rgba_image(src, new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn landscape_aspect_dimensions() {
        assert_eq!(calculate_aspect_dimensions(512, 256, 24).unwrap(), (48, 24));
        assert_eq!(calculate_aspect_dimensions(512, 256, 80).unwrap(), (160, 80));
    }

    #[test]
    fn aspect_width_truncates() {
        // 24 * 300 / 200 = 36, 24 * 301 / 200 = 36.12
        assert_eq!(calculate_aspect_dimensions(301, 200, 24).unwrap(), (36, 24));
        // 80 * 199 / 200 = 79.6
        assert_eq!(calculate_aspect_dimensions(199, 200, 80).unwrap(), (79, 80));
    }

    #[test]
    fn aspect_rejects_empty_source() {
        assert!(matches!(
            calculate_aspect_dimensions(10, 0, 24),
            Err(Error::EmptySource { width: 10, height: 0 })
        ));
    }

    #[test]
    fn aspect_rejects_collapsed_width() {
        assert!(matches!(
            calculate_aspect_dimensions(1, 1000, 24),
            Err(Error::DegenerateSize { width: 0, .. })
        ));
    }

    #[test]
    fn zero_target_is_rejected() {
        assert!(matches!(
            calculate_aspect_dimensions(10, 10, 0),
            Err(Error::ZeroSize { .. })
        ));
        assert!(matches!(
            calculate_square_fit_dimensions(10, 10, 0),
            Err(Error::ZeroSize { .. })
        ));
    }

    #[test]
    fn square_fit_pins_long_side() {
        assert_eq!(calculate_square_fit_dimensions(512, 256, 32).unwrap(), (32, 16));
        assert_eq!(calculate_square_fit_dimensions(256, 512, 32).unwrap(), (16, 32));
        assert_eq!(calculate_square_fit_dimensions(100, 100, 32).unwrap(), (32, 32));
        assert_eq!(calculate_square_fit_dimensions(300, 200, 16).unwrap(), (16, 10));
    }

    #[test]
    fn resize_to_height_keeps_exact_height() {
        let src = RgbaImage::from_pixel(512, 256, Rgba([200, 10, 10, 255]));
        let out = resize_to_height(&src, 24).unwrap();
        assert_eq!(out.dimensions(), (48, 24));
    }

    #[test]
    fn resize_of_uniform_image_stays_uniform() {
        let src = RgbaImage::from_pixel(64, 40, Rgba([30, 120, 220, 255]));
        let out = resize_rgba_image(&src, 16, 10).unwrap();
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip([30u8, 120, 220, 255]) {
                assert!(got.abs_diff(want) <= 1, "{:?}", p);
            }
        }
    }
}
