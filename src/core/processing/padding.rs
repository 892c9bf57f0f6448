use image::{DynamicImage, GenericImageView, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Rounded `v / 255` for `v <= 255 * 255`.
#[inline]
fn div255(v: u32) -> u8 {
    let tmp = v + 128;
    (((tmp >> 8) + tmp) >> 8) as u8
}

/// Top-left offset that centers a `width x height` image in a `size` square.
pub fn centered_offset(width: u32, height: u32, size: u32) -> (u32, u32) {
    ((size - width) / 2, (size - height) / 2)
}

/// Place `resized` in the middle of a fully transparent `size x size` RGBA canvas.
///
/// An image with an alpha channel acts as its own paste mask: every channel,
/// alpha included, is interpolated between canvas and source by the source
/// alpha. Images without alpha are copied opaquely.
pub fn add_padding_to_square(resized: &DynamicImage, size: u32) -> Result<RgbaImage> {
    let (cols, rows) = resized.dimensions();
    if cols > size || rows > size {
        return Err(Error::DoesNotFit {
            width: cols,
            height: rows,
            size,
        });
    }

    let (pad_cols, pad_rows) = centered_offset(cols, rows, size);
    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = RgbaImage::new(size, size);
    let src = resized.to_rgba8();

    if resized.color().has_alpha() {
        for (x, y, px) in src.enumerate_pixels() {
            let dst = padded.get_pixel_mut(x + pad_cols, y + pad_rows);
            let mask = u32::from(px[3]);
            for c in 0..4 {
                let blended = u32::from(px[c]) * mask + u32::from(dst[c]) * (255 - mask);
                dst[c] = div255(blended);
            }
        }
    } else {
        let row_bytes = cols as usize * 4;
        let stride = size as usize * 4;
        let src_raw: &[u8] = src.as_raw();
        let dst_raw: &mut [u8] = &mut padded;
        // No mask: each source row lands as one contiguous run of canvas bytes
        for row in 0..rows as usize {
            let src_offset = row * row_bytes;
            let dst_offset = (row + pad_rows as usize) * stride + pad_cols as usize * 4;
            dst_raw[dst_offset..dst_offset + row_bytes]
                .copy_from_slice(&src_raw[src_offset..src_offset + row_bytes]);
        }
    }

    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn offsets_floor_odd_margins() {
        assert_eq!(centered_offset(32, 16, 32), (0, 8));
        assert_eq!(centered_offset(16, 9, 16), (0, 3));
        assert_eq!(centered_offset(179, 180, 180), (0, 0));
    }

    #[test]
    fn opaque_rgba_content_is_centered_with_transparent_margins() {
        let src = RgbaImage::from_pixel(32, 16, Rgba([10, 20, 30, 255]));
        let out = add_padding_to_square(&DynamicImage::ImageRgba8(src), 32).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
        for (_, y, px) in out.enumerate_pixels() {
            if (8..24).contains(&y) {
                assert_eq!(*px, Rgba([10, 20, 30, 255]));
            } else {
                assert_eq!(*px, Rgba([0, 0, 0, 0]));
            }
        }
    }

    #[test]
    fn translucent_pixels_use_own_alpha_as_mask() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 0, 128]));
        let out = add_padding_to_square(&DynamicImage::ImageRgba8(src), 2).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([100, 50, 0, 64]));
    }

    #[test]
    fn fully_transparent_pixels_leave_canvas_untouched() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        let out = add_padding_to_square(&DynamicImage::ImageRgba8(src), 8).unwrap();
        assert!(out.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn images_without_alpha_paste_opaquely() {
        let src = RgbImage::from_pixel(3, 5, Rgb([7, 8, 9]));
        let out = add_padding_to_square(&DynamicImage::ImageRgb8(src), 5).unwrap();
        assert_eq!(*out.get_pixel(1, 0), Rgba([7, 8, 9, 255]));
        assert_eq!(*out.get_pixel(3, 4), Rgba([7, 8, 9, 255]));
        assert_eq!(*out.get_pixel(0, 2), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(4, 2), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let src = RgbaImage::new(33, 10);
        assert!(matches!(
            add_padding_to_square(&DynamicImage::ImageRgba8(src), 32),
            Err(Error::DoesNotFit { width: 33, .. })
        ));
    }
}
