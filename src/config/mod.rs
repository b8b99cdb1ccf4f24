//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, defaults, output_formats};
use crate::core::error::{HeaderStripError, Result};
use crate::rewrite::{ProcessOptions, RemovalRules};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory to walk. Relative paths in a config file are resolved
    /// against the directory holding that file.
    pub root: Option<PathBuf>,

    /// File-name suffix of candidate files
    pub extension: Option<String>,

    /// Removal patterns (regex), applied in order
    pub patterns: Option<Vec<String>>,

    /// Continue past per-file errors and report them at the end
    pub keep_going: Option<bool>,

    /// Descend into symlinked directories while walking
    pub follow_links: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Output format (text, json)
    pub output_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None, // Falls back to defaults::ROOT
            extension: Some(defaults::EXTENSION.to_string()),
            patterns: None, // Falls back to defaults::PATTERNS
            keep_going: Some(false),
            follow_links: Some(false),
            verbose: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
        }
    }
}

/// Values given on the command line, before merging with a config file
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub patterns: Option<Vec<String>>,
    pub keep_going: bool,
    pub follow_links: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub config_file: Option<PathBuf>,
    pub no_config: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HeaderStripError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            HeaderStripError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(root) = config.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.root = Some(if root.is_relative() {
                base.join(root)
            } else {
                root
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in the current directory or one of its
    /// parents, falling back to defaults when none exists.
    ///
    /// A config file that exists but cannot be loaded is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        for level in 0..=config_files::MAX_PARENT_LEVELS {
            let path = PathBuf::from(format!(
                "{}{}",
                "../".repeat(level),
                config_files::FILE_NAME
            ));
            if path.is_file() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref root) = cli_config.root {
            self.root = Some(root.clone());
        }
        if let Some(ref extension) = cli_config.extension {
            self.extension = Some(extension.clone());
        }
        if let Some(ref patterns) = cli_config.patterns {
            self.patterns = Some(patterns.clone());
        }

        if cli_config.keep_going {
            self.keep_going = Some(true);
        }
        if cli_config.follow_links {
            self.follow_links = Some(true);
        }

        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::ROOT))
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(defaults::EXTENSION)
    }

    pub fn patterns(&self) -> Vec<&str> {
        match self.patterns {
            Some(ref patterns) => patterns.iter().map(String::as_str).collect(),
            None => defaults::PATTERNS.to_vec(),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Compile the configured patterns into removal rules
    pub fn compile_rules(&self) -> Result<RemovalRules> {
        match self.patterns {
            Some(ref patterns) => RemovalRules::new(patterns),
            None => Ok(RemovalRules::default()),
        }
    }

    /// Build the options for one processing run
    pub fn process_options(&self) -> Result<ProcessOptions> {
        self.validate()?;
        Ok(ProcessOptions {
            extension: self.extension().to_string(),
            rules: self.compile_rules()?,
            keep_going: self.keep_going.unwrap_or(false),
            follow_links: self.follow_links.unwrap_or(false),
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.extension().is_empty() {
            return Err(HeaderStripError::Config(
                "Extension cannot be empty. Expected a file-name suffix such as '.html'."
                    .to_string(),
            ));
        }

        if let Some(ref patterns) = self.patterns {
            if patterns.is_empty() {
                return Err(HeaderStripError::Config(
                    "Patterns cannot be empty. Omit the key to use the default header patterns."
                        .to_string(),
                ));
            }
            for pattern in patterns {
                regex::Regex::new(pattern).map_err(|e| {
                    HeaderStripError::Config(format!("Invalid pattern '{pattern}': {e}"))
                })?;
            }
        }

        let format = self.output_format();
        if !output_formats::ALL.contains(&format) {
            return Err(HeaderStripError::Config(format!(
                "Invalid output format '{}'. Expected one of: {}",
                format,
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn write_config(content: &str) -> std::result::Result<NamedTempFile, std::io::Error> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.root(), PathBuf::from(defaults::ROOT));
        assert_eq!(config.extension(), ".html");
        assert_eq!(config.patterns(), defaults::PATTERNS.to_vec());
        assert_eq!(config.output_format(), "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file__full() -> TestResult {
        let file = write_config(
            r#"
root = "/srv/site/pages"
extension = ".htm"
patterns = ['(?s)<nav class="old">.*?</nav>']
keep_going = true
follow_links = true
verbose = true
output_format = "json"
"#,
        )?;

        let config = Config::load_from_file(file.path())?;

        assert_eq!(config.root(), PathBuf::from("/srv/site/pages"));
        assert_eq!(config.extension(), ".htm");
        assert_eq!(config.patterns(), vec![r#"(?s)<nav class="old">.*?</nav>"#]);
        assert_eq!(config.keep_going, Some(true));
        assert_eq!(config.follow_links, Some(true));
        assert_eq!(config.output_format(), "json");
        Ok(())
    }

    #[test]
    fn test_load_from_file__partial_uses_defaults() -> TestResult {
        let file = write_config("keep_going = true\n")?;

        let config = Config::load_from_file(file.path())?;

        assert_eq!(config.extension(), ".html");
        assert_eq!(config.patterns(), defaults::PATTERNS.to_vec());
        assert_eq!(config.root(), PathBuf::from(defaults::ROOT));
        Ok(())
    }

    #[test]
    fn test_load_from_file__relative_root_resolved_against_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(config_files::FILE_NAME);
        fs::write(&path, "root = \"src/app/pages\"\n")?;

        let config = Config::load_from_file(&path)?;

        assert_eq!(config.root(), dir.path().join("src/app/pages"));
        Ok(())
    }

    #[test]
    fn test_load_from_file__missing() {
        let result = Config::load_from_file("/definitely/missing/.headerstrip.toml");

        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Could not read config file")
        );
    }

    #[test]
    fn test_load_from_file__invalid_toml() -> TestResult {
        let file = write_config("extension = [")?;

        let result = Config::load_from_file(file.path());

        assert!(result.unwrap_err().to_string().contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_load_from_file__unknown_key_rejected() -> TestResult {
        let file = write_config("extensions = \".html\"\n")?;

        let result = Config::load_from_file(file.path());

        assert!(result.unwrap_err().to_string().contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_load_from_file__invalid_pattern_rejected() -> TestResult {
        let file = write_config("patterns = ['(unclosed']\n")?;

        let result = Config::load_from_file(file.path());

        assert!(result.unwrap_err().to_string().contains("Invalid pattern"));
        Ok(())
    }

    #[test]
    fn test_merge_with_cli__cli_wins() {
        let mut config = Config {
            root: Some(PathBuf::from("/from/file")),
            extension: Some(".htm".to_string()),
            ..Default::default()
        };
        let cli_config = CliConfig {
            root: Some(PathBuf::from("/from/cli")),
            patterns: Some(vec!["<aside>.*?</aside>".to_string()]),
            keep_going: true,
            output_format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.root(), PathBuf::from("/from/cli"));
        assert_eq!(config.extension(), ".htm");
        assert_eq!(config.patterns(), vec!["<aside>.*?</aside>"]);
        assert_eq!(config.keep_going, Some(true));
        assert_eq!(config.output_format(), "json");
    }

    #[test]
    fn test_merge_with_cli__unset_flags_keep_file_values() {
        let mut config = Config {
            keep_going: Some(true),
            follow_links: Some(true),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.keep_going, Some(true));
        assert_eq!(config.follow_links, Some(true));
    }

    #[test]
    fn test_validate__empty_extension() {
        let config = Config {
            extension: Some(String::new()),
            ..Default::default()
        };

        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("Extension cannot be empty")
        );
    }

    #[test]
    fn test_validate__empty_patterns() {
        let config = Config {
            patterns: Some(vec![]),
            ..Default::default()
        };

        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("Patterns cannot be empty")
        );
    }

    #[test]
    fn test_validate__unknown_output_format() {
        let config = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };

        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("Invalid output format 'xml'")
        );
    }

    #[test]
    fn test_process_options__from_defaults() -> TestResult {
        let options = Config::default().process_options()?;

        assert_eq!(options.extension, ".html");
        assert_eq!(options.rules.len(), 2);
        assert!(!options.keep_going);
        assert!(!options.follow_links);
        Ok(())
    }

    #[test]
    fn test_process_options__custom_patterns() -> TestResult {
        let config = Config {
            patterns: Some(vec!["<footer>.*?</footer>".to_string()]),
            keep_going: Some(true),
            ..Default::default()
        };

        let options = config.process_options()?;

        assert_eq!(options.rules.len(), 1);
        assert_eq!(
            options.rules.patterns().collect::<Vec<_>>(),
            vec!["<footer>.*?</footer>"]
        );
        assert!(options.keep_going);
        Ok(())
    }
}
