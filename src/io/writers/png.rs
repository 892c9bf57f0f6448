use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })
}
