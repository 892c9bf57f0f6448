use std::env;
use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use logo_resize::{AssetPlan, derive_assets};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(_args: CliArgs) -> logo_resize::Result<()> {
    init_logging();

    let root = env::current_dir()?;
    info!("Project root: {:?}", root);

    let plan = AssetPlan::default();
    let stdout = std::io::stdout();
    let report = derive_assets(&root, &plan, &mut stdout.lock())?;

    info!(
        "Derived {} assets from {}x{} source",
        report.written.len(),
        report.source_width,
        report.source_height
    );
    Ok(())
}

/// Print a fatal error. Written directly, so no `RUST_LOG` filter can hide it.
pub fn report_error<W: Write>(err: &logo_resize::Error, out: &mut W) {
    let _ = writeln!(out, "Error: {err}");
}
