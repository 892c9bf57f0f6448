//! Command line layer for `resize-logo`.
//!
//! `args` declares the (option-free) command, `runner` sets up logging and
//! drives `logo_resize::derive_assets` against the current directory.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report_error, run};
