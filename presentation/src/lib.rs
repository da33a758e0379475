//! Presentation layer for kbridge
//!
//! This crate contains the text presenter that turns action outcomes into
//! what the model and the user read, the console formatter for tool results
//! and the CLI definitions.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::presenter::TextPresenter;
