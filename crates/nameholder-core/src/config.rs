use crate::errors::{HolderError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "nameholder.yaml";

/// Settings for driving a name holder from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderConfig {
    /// Output format for printed names (default: text)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log every executed command at info level (default: false)
    #[serde(default)]
    pub echo_commands: bool,
}

impl Default for HolderConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            echo_commands: false,
        }
    }
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_format: Option<OutputFormat>,
    pub echo_commands: Option<bool>,
}

impl HolderConfig {
    /// Load configuration from a file. `.yaml` and `.yml` files are read as
    /// YAML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if is_yaml(path) {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| HolderError::Config(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| HolderError::Config(e.to_string()))
    }

    /// Write the default configuration to `path` as YAML
    pub fn init_file(path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(&HolderConfig::default())
            .map_err(|e| HolderError::Config(e.to_string()))?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Merge CLI overrides into this configuration
    pub fn merge(&mut self, overrides: &CliOverrides) {
        if let Some(format) = overrides.output_format {
            self.output_format = format;
        }
        if let Some(echo) = overrides.echo_commands {
            self.echo_commands = echo;
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
