use serde::Deserialize;

use crate::logger::LogTarget;
use crate::output::OutputTarget;

/// TOML-deserializable config file format.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    /// Line printed on each run.
    #[serde(default)]
    pub greeting: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// "stdout" or "stderr".
    pub target: Option<OutputTarget>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    /// "stdout", "stderr", or "tracing".
    pub target: Option<LogTarget>,
    /// Stamp each entry with the local date and time.
    pub timestamps: Option<bool>,
    /// Text placed before every entry.
    pub prefix: Option<String>,
}

impl FileConfig {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
