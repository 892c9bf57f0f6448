use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{AssetFormat, OutputDir, Transform};

/// Source logo location, relative to the project root.
pub const SOURCE_LOGO: &str = "logo.png";

/// One output file of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub file_name: String,
    pub dir: OutputDir,
    pub transform: Transform,
    pub format: AssetFormat,
}

impl AssetSpec {
    pub fn new(file_name: &str, dir: OutputDir, transform: Transform, format: AssetFormat) -> Self {
        Self {
            file_name: file_name.to_string(),
            dir,
            transform,
            format,
        }
    }

    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(self.dir.relative_path()).join(&self.file_name)
    }
}

/// Ordered list of assets derived from the source logo.
///
/// Order is write order: a failed run leaves exactly the prefix of this list
/// that was written before the fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPlan {
    pub assets: Vec<AssetSpec>,
}

impl Default for AssetPlan {
    fn default() -> Self {
        use AssetFormat::{Ico, Png};
        use OutputDir::{App, Public};
        use Transform::{AspectHeight, Square};

        Self {
            assets: vec![
                AssetSpec::new("logo-24.png", Public, AspectHeight(24), Png),
                AssetSpec::new("logo-80.png", Public, AspectHeight(80), Png),
                AssetSpec::new("favicon-16.png", Public, Square(16), Png),
                AssetSpec::new("favicon-32.png", Public, Square(32), Png),
                AssetSpec::new("apple-touch-icon.png", Public, Square(180), Png),
                AssetSpec::new("favicon.ico", Public, Square(32), Ico),
                AssetSpec::new("favicon.ico", App, Square(32), Ico),
                AssetSpec::new("icon.png", App, Square(32), Png),
                AssetSpec::new("apple-icon.png", App, Square(180), Png),
            ],
        }
    }
}

impl AssetPlan {
    /// Distinct square sizes in first-use order.
    pub fn square_sizes(&self) -> Vec<u32> {
        let mut sizes = Vec::new();
        for asset in &self.assets {
            if let Transform::Square(size) = asset.transform {
                if !sizes.contains(&size) {
                    sizes.push(size);
                }
            }
        }
        sizes
    }

    pub fn in_dir(&self, dir: OutputDir) -> impl Iterator<Item = &AssetSpec> {
        self.assets.iter().filter(move |a| a.dir == dir)
    }
}
