//! Showcase CLI Library
//!
//! Command implementations for the Showcase landing page generator, exposed
//! as a library so the binary stays a thin argument parser.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use showcase::cmd;
//!
//! // Build the site described by config.toml into its configured output dir
//! cmd::build::run(Path::new("config.toml"), None, false, None).unwrap();
//! ```

use std::path::{Path, PathBuf};

pub mod cmd;

pub use showcase_core::{Config, Website};
pub use showcase_generator::{BuildStats, Builder, LandingTheme};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Resolve a site directory relative to the configuration file.
pub fn site_path(config_path: &Path, dir: impl AsRef<Path>) -> PathBuf {
    let dir = dir.as_ref();
    match config_path.parent() {
        Some(root) if dir.is_relative() => root.join(dir),
        _ => dir.to_path_buf(),
    }
}
