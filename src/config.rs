use std::env;
use std::path::PathBuf;

pub struct Config {
    /// Request description to read; stdin when unset.
    pub input_path: Option<PathBuf>,
    /// JSON object of environment variables used by the header formatter.
    pub environment_path: Option<PathBuf>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input_path: lookup("PREVIEW_INPUT")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            environment_path: lookup("PREVIEW_ENVIRONMENT")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            pretty: lookup("PREVIEW_COMPACT")
                .map(|v| matches!(v.as_str(), "" | "0" | "false"))
                .unwrap_or(true),
        }
    }
}
