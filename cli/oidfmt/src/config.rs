//! `oidfmt.toml` configuration and output settings.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use oidfmt_core::Notation;
use serde::{Deserialize, Serialize};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE: &str = "oidfmt.toml";

/// The top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OidfmtConfig {
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default notation when `--notation` is not given.
    #[serde(default)]
    pub notation: Option<Notation>,
    /// Default output format when `--format` is not given.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// How results are written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => bail!("unknown output format: '{s}'. Available formats: text, json"),
        }
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub notation: Notation,
    pub format: OutputFormat,
}

impl OidfmtConfig {
    /// Search upward from `start_dir` for an `oidfmt.toml` file, parse and return it
    /// along with the path it was read from.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config = Self::parse(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Combine file defaults with command-line flags; flags win.
    pub fn settings(&self, notation: Option<&str>, format: Option<&str>) -> Result<Settings> {
        let notation = match notation {
            Some(name) => Notation::parse(name)?,
            None => self.output.notation.unwrap_or_default(),
        };
        let format = match format {
            Some(name) => OutputFormat::parse(name)?,
            None => self.output.format.unwrap_or_default(),
        };
        Ok(Settings { notation, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
notation = "asn1"
format = "json"
"#;
        let config = OidfmtConfig::parse(toml_str).unwrap();
        assert_eq!(config.output.notation, Some(Notation::Asn1));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_empty_config() {
        let config = OidfmtConfig::parse("").unwrap();
        assert!(config.output.notation.is_none());
        assert_eq!(config.settings(None, None).unwrap(), Settings::default());
    }

    #[test]
    fn reject_unknown_notation_in_file() {
        let toml_str = r#"
[output]
notation = "hex"
"#;
        assert!(OidfmtConfig::parse(toml_str).is_err());
    }

    #[test]
    fn file_accepts_same_names_as_flag() {
        let config = OidfmtConfig::parse("[output]\nnotation = \"dotted\"\n").unwrap();
        assert_eq!(config.output.notation, Some(Notation::Dot));
        assert_eq!(
            config.settings(None, None).unwrap().notation,
            OidfmtConfig::default().settings(Some("dotted"), None).unwrap().notation
        );

        let config = OidfmtConfig::parse("[output]\nnotation = \"asn.1\"\n").unwrap();
        assert_eq!(config.output.notation, Some(Notation::Asn1));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(OidfmtConfig::parse("this is not valid toml [[[").is_err());
    }

    #[test]
    fn flags_override_file() {
        let toml_str = r#"
[output]
notation = "asn1"
format = "json"
"#;
        let config = OidfmtConfig::parse(toml_str).unwrap();
        let settings = config.settings(Some("dot"), Some("text")).unwrap();
        assert_eq!(settings.notation, Notation::Dot);
        assert_eq!(settings.format, OutputFormat::Text);

        let settings = config.settings(None, None).unwrap();
        assert_eq!(settings.notation, Notation::Asn1);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn bad_flags_are_errors() {
        let config = OidfmtConfig::default();
        assert!(config.settings(Some("hex"), None).is_err());
        assert!(config.settings(None, Some("yaml")).is_err());
        assert!(config.settings(None, Some("human")).is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let (config, found) = OidfmtConfig::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(found, path);
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output]\nnotation = \"asn1\"\n").unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, _) = OidfmtConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.output.notation, Some(Notation::Asn1));
    }

    #[test]
    fn find_and_load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output]\nformat = 3\n").unwrap();

        let err = OidfmtConfig::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }
}
