pub mod schema;

use crate::errors::{GreetlineError, Result};
use crate::logger::LogTarget;
use crate::output::OutputTarget;
use schema::FileConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_GREETING: &str = "Good morning!";

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Line printed by the binary.
    pub greeting: String,
    /// Where the greeting is written.
    pub output_target: OutputTarget,
    /// Where write failures are reported.
    pub log_target: LogTarget,
    pub log_timestamps: bool,
    pub log_prefix: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            output_target: OutputTarget::Stdout,
            log_target: LogTarget::Stdout,
            log_timestamps: true,
            log_prefix: String::new(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("greetline").join("config.toml"))
}

/// Load configuration: defaults → file.
///
/// An explicit path must exist and parse. The default location is optional:
/// when it is missing, unreadable or malformed the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    match explicit {
        Some(path) => load_file(path),
        None => Ok(load_default(config_path())),
    }
}

fn load_default(path: Option<PathBuf>) -> ResolvedConfig {
    let Some(path) = path.filter(|p| p.exists()) else {
        return ResolvedConfig::default();
    };
    match load_file(&path) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unusable config file");
            ResolvedConfig::default()
        }
    }
}

fn load_file(path: &Path) -> Result<ResolvedConfig> {
    let contents = std::fs::read_to_string(path)?;
    let file = FileConfig::from_toml(&contents).map_err(|e| {
        GreetlineError::Config(format!("Failed to parse {}: {e}", path.display()))
    })?;

    let mut resolved = ResolvedConfig::default();
    apply_file_config(&mut resolved, &file);
    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(resolved)
}

fn apply_file_config(r: &mut ResolvedConfig, f: &FileConfig) {
    if let Some(ref greeting) = f.greeting {
        r.greeting = greeting.clone();
    }
    if let Some(target) = f.output.target {
        r.output_target = target;
    }
    if let Some(target) = f.log.target {
        r.log_target = target;
    }
    if let Some(timestamps) = f.log.timestamps {
        r.log_timestamps = timestamps;
    }
    if let Some(ref prefix) = f.log.prefix {
        r.log_prefix = prefix.clone();
    }
}
