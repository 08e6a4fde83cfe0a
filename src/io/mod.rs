//! Input/output at the edges of the engine: errors, constants, image
//! files, the command line and progress display

/// Command-line interface and batch processing
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error type shared by every operation
pub mod error;
/// PNG loading and saving
pub mod image;
/// Progress bars for batch generation
pub mod progress;
