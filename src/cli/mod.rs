//! Command-line front end.

mod context;
mod flags;
pub mod prompts;

use tracing_subscriber::EnvFilter;

use crate::pass::ConfigError;
use crate::settings::SettingsError;

pub use context::Context;
pub use flags::CliFlags;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to write passwords: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),
}

/// Log to stderr. `RUST_LOG` wins over the `-v` level.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI with parsed flags. Returns the process exit code.
pub fn run(flags: CliFlags) -> i32 {
    init_logging(flags.log_level());

    match Context::new(flags).run() {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
