use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::delay_manager::DelayRange;
use crate::error::Result;
use crate::search_params::DEFAULT_API_BASE;

/// Settings for one extraction run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// CSV file written by the run. Removed first if it exists.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Search endpoint, without query string.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Lower bound of the pause after each page, in milliseconds
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound of the pause after each page, in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Per-request timeout. Unset leaves the HTTP client default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("indeedjobs.csv")
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_min_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    2000
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output_path: default_output_path(),
            api_base_url: default_api_base_url(),
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            request_timeout_secs: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn delay(&self) -> DelayRange {
        DelayRange::new(self.min_delay_ms, self.max_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
