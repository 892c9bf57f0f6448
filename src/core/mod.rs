//! Core building blocks: the fixed asset plan, resize arithmetic, square
//! padding, and the per-run square cache. These are internal primitives
//! consumed by the high-level `api` module.
pub mod plan;
pub mod processing;
