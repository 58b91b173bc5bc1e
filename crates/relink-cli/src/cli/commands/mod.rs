//! CLI command handlers, one per file.

mod discover;
mod normalize;

pub use discover::run_discover;
pub use normalize::run_normalize;
