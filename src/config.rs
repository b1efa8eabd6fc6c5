use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-user or per-repo defaults for the hook flags.
///
/// CLI flags override anything set here, so a team can commit a
/// `gitissuetag.toml` with its convention and individual invocations can
/// still deviate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub use_conventional_commit: bool,

    #[serde(default)]
    pub force_issue_id: bool,

    #[serde(default = "default_skip_merge_commit")]
    pub skip_merge_commit: bool,
}

/// Merge commits are skipped unless explicitly requested otherwise.
fn default_skip_merge_commit() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_conventional_commit: false,
            force_issue_id: false,
            skip_merge_commit: default_skip_merge_commit(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitissuetag.toml` in current directory
/// 3. `.gitissuetag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitissuetag.toml").exists() {
        fs::read_to_string("./gitissuetag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitissuetag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
