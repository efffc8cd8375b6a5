// Configuration types module
// Defines the serde structures loaded once at startup

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub content_types: ContentTypeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Explicit serving root; when absent, the directory containing the
    /// server executable is used
    pub root: Option<String>,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Content-type override table, consulted before the default extension table.
///
/// Keys are file extensions with the leading dot. The defaults let a browser
/// execute raw TypeScript sources as module scripts during development.
#[derive(Debug, Deserialize, Clone)]
pub struct ContentTypeConfig {
    #[serde(default = "default_overrides")]
    pub overrides: HashMap<String, String>,
}

fn default_overrides() -> HashMap<String, String> {
    HashMap::from([
        (".ts".to_string(), "application/javascript".to_string()),
        (".tsx".to_string(), "application/javascript".to_string()),
    ])
}

impl Default for ContentTypeConfig {
    fn default() -> Self {
        Self {
            overrides: default_overrides(),
        }
    }
}
