#![doc = r#"
logo-resize: derive a web app's logo and favicon set from one source image.

Given a project root containing `logo.png`, a run writes:

- `public/logo-24.png`, `public/logo-80.png`: the logo scaled to 24 and 80 px high
- `public/favicon-16.png`, `public/favicon-32.png`, `public/apple-touch-icon.png`:
  the logo fitted into 16, 32 and 180 px squares on a transparent canvas
- `public/favicon.ico`: the 32 px square as a multi-resolution icon
- `src/app/favicon.ico`, `src/app/icon.png`, `src/app/apple-icon.png`:
  file-based metadata icons for the app router

Resampling is Lanczos3 throughout.

Quick start
-----------
```rust,no_run
use std::path::Path;
use logo_resize::{AssetPlan, derive_assets};

fn main() -> logo_resize::Result<()> {
    let report = derive_assets(Path::new("."), &AssetPlan::default(), &mut std::io::stdout())?;
    println!("{} files written", report.written.len());
    Ok(())
}
```

In-memory transforms
--------------------
```rust
use image::{Rgba, RgbaImage};
use logo_resize::{aspect_resize, square_resize};

fn main() -> logo_resize::Result<()> {
    let logo = RgbaImage::from_pixel(512, 256, Rgba([0, 0, 0, 255]));
    assert_eq!(aspect_resize(&logo, 24)?.dimensions(), (48, 24));
    assert_eq!(square_resize(&logo, 32)?.dimensions(), (32, 32));
    Ok(())
}
```

Errors
------
Every fallible call returns `logo_resize::Result<T>`. Nothing is retried and
files written before a failure are left in place.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::plan::{AssetPlan, AssetSpec, SOURCE_LOGO};
pub use error::{Error, Result};
pub use types::{AssetFormat, OutputDir, Transform};

pub use api::{DeriveReport, WrittenAsset, aspect_resize, derive_assets, square_resize};
