use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// How names are written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "text")]
    #[default]
    Text,
    #[serde(rename = "json")]
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format '{}'. Supported formats: text, json",
                s
            )),
        }
    }
}

#[derive(Serialize)]
struct NameLine<'a> {
    name: &'a str,
}

/// Render one name as a single output line (without the trailing newline)
pub fn render(format: OutputFormat, name: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(name.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&NameLine { name })?),
    }
}
