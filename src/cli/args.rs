use clap::Parser;

/// Derive logo, favicon and app icon files from `./logo.png`.
///
/// Writes into `./public` and `./src/app`. Diagnostic logging on stderr
/// follows `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "resize-logo", version, about)]
pub struct CliArgs {}
