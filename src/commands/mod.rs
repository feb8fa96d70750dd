//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: Summarize a text, label its tone and suggest improvements
//! - **init**: Initialize a new tonemap configuration file

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig, InputSource};
pub use init::init_config;
