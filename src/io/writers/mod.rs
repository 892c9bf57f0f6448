//! Writers for derived assets. Each call creates or truncates exactly one file.
pub mod ico;
pub mod png;

pub use ico::write_ico;
pub use png::write_png;

use std::path::Path;

use image::RgbaImage;

use crate::error::Result;
use crate::types::AssetFormat;

pub fn write_asset(output: &Path, img: &RgbaImage, format: AssetFormat) -> Result<()> {
    match format {
        AssetFormat::Png => write_png(output, img),
        AssetFormat::Ico => write_ico(output, img),
    }
}
