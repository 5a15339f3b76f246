use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete configuration for git-next-version.
///
/// Everything here can also be set on the command line; flags win over the
/// config file.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Commit-type prefix tables for classification.
///
/// A table given here replaces the built-in default wholesale; an absent
/// table keeps the default.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ConventionalCommitsConfig {
    pub chore_prefixes: Option<Vec<String>>,
    pub fix_prefixes: Option<Vec<String>>,
    pub feature_prefixes: Option<Vec<String>>,
}

fn default_target() -> String {
    "version".to_string()
}

/// Output defaults, overridable per invocation
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            target: default_target(),
            prefix: String::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitnextversion.toml` in current directory
/// 3. `.gitnextversion.toml` in user config directory
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
    } else if Path::new("./gitnextversion.toml").exists() {
        fs::read_to_string("./gitnextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitnextversion.toml");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.target, "version");
        assert_eq!(config.output.prefix, "");
        assert!(config.conventional_commits.fix_prefixes.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [conventional_commits]
            fix_prefixes = ["fix", "bugfix"]
            feature_prefixes = ["feat", "feature"]

            [output]
            target = "json"
            prefix = "v"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.conventional_commits.fix_prefixes,
            Some(vec!["fix".to_string(), "bugfix".to_string()])
        );
        assert!(config.conventional_commits.chore_prefixes.is_none());
        assert_eq!(config.output.target, "json");
        assert_eq!(config.output.prefix, "v");
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let toml_str = r#"
            [output]
            prefix = "v"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.target, "version");
        assert_eq!(config.output.prefix, "v");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.target, "version");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("not [ valid");
        assert!(result.is_err());
    }
}
