use std::path::Path;

use image::{GenericImageView, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Load the source logo and force it to 8-bit RGBA.
pub fn load_source_logo(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    debug!("Decoded {:?} as {:?}", path, img.color());
    info!("Loaded source logo {}x{} from {:?}", width, height, path);

    Ok(img.to_rgba8())
}
