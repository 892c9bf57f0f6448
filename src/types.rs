//! Shared types used across the crate.
//! Includes `Transform`, `AssetFormat` and `OutputDir`.
use serde::{Deserialize, Serialize};

/// How a derived asset is produced from the source logo.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Transform {
    /// Scale to this exact height, width follows the source aspect ratio.
    AspectHeight(u32),
    /// Fit inside a square of this side and center on a transparent canvas.
    Square(u32),
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transform::AspectHeight(h) => write!(f, "height {}", h),
            Transform::Square(s) => write!(f, "{}x{}", s, s),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum AssetFormat {
    Png,
    Ico,
}

impl std::fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetFormat::Png => write!(f, "PNG"),
            AssetFormat::Ico => write!(f, "ICO"),
        }
    }
}

/// Destination directory, relative to the project root.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputDir {
    /// Static assets served as-is (`public/`).
    Public,
    /// Framework file-based metadata icons (`src/app/`).
    App,
}

impl OutputDir {
    pub fn relative_path(&self) -> &'static str {
        match self {
            OutputDir::Public => "public",
            OutputDir::App => "src/app",
        }
    }

    /// Whether a run creates the directory when it is missing.
    /// The framework directory belongs to the app and must already exist.
    pub fn create_if_missing(&self) -> bool {
        matches!(self, OutputDir::Public)
    }
}

impl std::fmt::Display for OutputDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path())
    }
}
