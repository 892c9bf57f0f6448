//! High-level library API: derive the whole asset set from a project root, or
//! apply the two transforms to an in-memory image. Prefer these entrypoints
//! over the low-level processing modules.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::plan::{AssetPlan, SOURCE_LOGO};
use crate::core::processing::resize::resize_to_height;
use crate::core::processing::square::{SquareCache, resize_to_square};
use crate::error::Result;
use crate::io::{load_source_logo, write_asset};
use crate::types::{AssetFormat, OutputDir, Transform};

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: AssetFormat,
}

/// Outcome of a completed run, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveReport {
    pub source_width: u32,
    pub source_height: u32,
    pub written: Vec<WrittenAsset>,
}

/// Aspect-preserving resize to an exact height.
pub fn aspect_resize(img: &RgbaImage, target_height: u32) -> Result<RgbaImage> {
    resize_to_height(img, target_height)
}

/// Fit inside a square of `target_size` and center on a transparent canvas.
pub fn square_resize(img: &RgbaImage, target_size: u32) -> Result<RgbaImage> {
    resize_to_square(img, target_size)
}

fn ensure_output_dir(root: &Path, dir: OutputDir) -> Result<()> {
    let path = root.join(dir.relative_path());
    if dir.create_if_missing() && !path.is_dir() {
        info!("Creating output directory {:?}", path);
        fs::create_dir(&path)?;
    }
    Ok(())
}

fn square_summary(plan: &AssetPlan) -> String {
    let mut parts: Vec<String> = plan
        .square_sizes()
        .iter()
        .map(|s| format!("{}x{}", s, s))
        .collect();
    if plan.assets.iter().any(|a| a.format == AssetFormat::Ico) {
        parts.push(".ico".to_string());
    }
    parts.join(", ")
}

/// Derive every asset in `plan` from `<root>/logo.png`.
///
/// Progress lines go to `progress`. Files are written one at a time in plan
/// order; on error the run stops and files already written stay on disk.
pub fn derive_assets<W: Write>(
    root: &Path,
    plan: &AssetPlan,
    progress: &mut W,
) -> Result<DeriveReport> {
    let source_path = root.join(SOURCE_LOGO);
    let logo = load_source_logo(&source_path)?;
    let (source_width, source_height) = logo.dimensions();
    writeln!(progress, "Source logo: {}x{}", source_width, source_height)?;

    if let Ok(json) = serde_json::to_string(plan) {
        debug!("Asset plan: {}", json);
    }

    let mut squares = SquareCache::new(&logo);
    let mut written = Vec::with_capacity(plan.assets.len());
    let mut prepared_dirs: Vec<OutputDir> = Vec::new();

    for asset in &plan.assets {
        if !prepared_dirs.contains(&asset.dir) {
            ensure_output_dir(root, asset.dir)?;
            prepared_dirs.push(asset.dir);
        }

        let aspect;
        let img = match asset.transform {
            Transform::AspectHeight(height) => {
                aspect = resize_to_height(&logo, height)?;
                &aspect
            }
            Transform::Square(size) => squares.get(size)?,
        };

        let output = asset.path_under(root);
        write_asset(&output, img, asset.format)?;
        info!("Wrote {:?} ({}, {})", output, asset.format, asset.transform);
        writeln!(
            progress,
            "{}/{}: {}x{}",
            asset.dir,
            asset.file_name,
            img.width(),
            img.height()
        )?;

        written.push(WrittenAsset {
            path: output,
            width: img.width(),
            height: img.height(),
            format: asset.format,
        });
    }

    writeln!(progress, "Favicons generated: {}", square_summary(plan))?;
    let framework: Vec<&str> = plan
        .in_dir(OutputDir::App)
        .map(|a| a.file_name.as_str())
        .collect();
    if !framework.is_empty() {
        writeln!(progress, "Framework icons: {}", framework.join(", "))?;
    }
    writeln!(progress, "Done!")?;

    Ok(DeriveReport {
        source_width,
        source_height,
        written,
    })
}
