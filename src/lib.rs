pub mod config;
pub mod emconf;
pub mod identifiers;
pub mod installer;
pub mod logging;
pub mod manifest;
pub mod paths;
pub mod prompt;

// Re-export commonly used types
pub use config::KickstartConfig;
pub use installer::{Answers, Presets, SetupState};
pub use prompt::Prompter;
