//! Input/output operations and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Color and palette parsing
pub mod palette;
/// Batch progress display
pub mod progress;
