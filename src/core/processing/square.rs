use std::collections::BTreeMap;

use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::core::processing::padding::add_padding_to_square;
use crate::core::processing::resize::{calculate_square_fit_dimensions, resize_rgba_image};
use crate::error::Result;

/// Fit `src` inside a `target_size` square and center it on a transparent canvas.
pub fn resize_to_square(src: &RgbaImage, target_size: u32) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    let (new_width, new_height) = calculate_square_fit_dimensions(width, height, target_size)?;

    info!(
        "Square resize: {}x{} -> {}x{} on {}x{} canvas",
        width, height, new_width, new_height, target_size, target_size
    );

    let resized = resize_rgba_image(src, new_width, new_height)?;
    add_padding_to_square(&DynamicImage::ImageRgba8(resized), target_size)
}

/// Square renditions of one source, computed at most once per size.
pub struct SquareCache<'a> {
    source: &'a RgbaImage,
    squares: BTreeMap<u32, RgbaImage>,
}

impl<'a> SquareCache<'a> {
    pub fn new(source: &'a RgbaImage) -> Self {
        Self {
            source,
            squares: BTreeMap::new(),
        }
    }

    pub fn get(&mut self, size: u32) -> Result<&RgbaImage> {
        if !self.squares.contains_key(&size) {
            let square = resize_to_square(self.source, size)?;
            self.squares.insert(size, square);
        } else {
            debug!("Reusing {}x{} square", size, size);
        }
        Ok(&self.squares[&size])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn margins(img: &RgbaImage) -> (u32, u32, u32, u32) {
        let (w, h) = img.dimensions();
        let opaque_col = |x: u32| (0..h).any(|y| img.get_pixel(x, y)[3] != 0);
        let opaque_row = |y: u32| (0..w).any(|x| img.get_pixel(x, y)[3] != 0);
        let left = (0..w).take_while(|&x| !opaque_col(x)).count() as u32;
        let right = (0..w).rev().take_while(|&x| !opaque_col(x)).count() as u32;
        let top = (0..h).take_while(|&y| !opaque_row(y)).count() as u32;
        let bottom = (0..h).rev().take_while(|&y| !opaque_row(y)).count() as u32;
        (left, right, top, bottom)
    }

    #[test]
    fn landscape_logo_gets_top_and_bottom_margins() {
        let src = RgbaImage::from_pixel(512, 256, Rgba([0, 90, 200, 255]));
        let out = resize_to_square(&src, 32).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
        assert_eq!(margins(&out), (0, 0, 8, 8));
    }

    #[test]
    fn square_logo_fills_canvas() {
        let src = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
        let out = resize_to_square(&src, 32).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
        assert_eq!(margins(&out), (0, 0, 0, 0));
    }

    #[test]
    fn odd_margins_differ_by_at_most_one() {
        let src = RgbaImage::from_pixel(300, 217, Rgba([1, 2, 3, 255]));
        for size in [16, 32, 180] {
            let out = resize_to_square(&src, size).unwrap();
            let (left, right, top, bottom) = margins(&out);
            assert_eq!((left, right), (0, 0));
            assert!(top.abs_diff(bottom) <= 1, "size {}: {} vs {}", size, top, bottom);
            assert!(top <= bottom);
        }
    }

    #[test]
    fn portrait_logo_gets_side_margins() {
        let src = RgbaImage::from_pixel(90, 180, Rgba([9, 9, 9, 255]));
        let out = resize_to_square(&src, 16).unwrap();
        assert_eq!(margins(&out), (4, 4, 0, 0));
    }

    #[test]
    fn cache_computes_each_size_once() {
        let src = RgbaImage::from_pixel(64, 32, Rgba([5, 6, 7, 255]));
        let mut cache = SquareCache::new(&src);
        assert!(cache.is_empty());
        let first = cache.get(32).unwrap().clone();
        cache.get(16).unwrap();
        let again = cache.get(32).unwrap();
        assert_eq!(&first, again);
        assert_eq!(cache.len(), 2);
        assert_eq!(first, resize_to_square(&src, 32).unwrap());
    }
}
