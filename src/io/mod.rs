//! Input/output: configuration, layout files, image export, CLI and errors

/// Command-line interface and the render driver
pub mod cli;
/// Board constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Layout text parsing and loading
pub mod layout;
