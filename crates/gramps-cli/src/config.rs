//! Command line configuration for `gramps-dump`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GRAMPS_LOG_LEVEL` | warn | Log level |
//! | `GRAMPS_STRICT_NAMESPACE` | false | Reject documents outside the modeled namespace |
//! | `GRAMPS_OUTPUT_FORMAT` | summary | `summary`, `json` or `xml` |
//! | `GRAMPS_INDENT` | 2 | Indentation of XML output, 0 for compact |

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grampsxml::{NamespacePolicy, ParseOptions, WriteOptions};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// What to print after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Section counts and a listing of people and families.
    #[default]
    Summary,
    /// The whole document model as JSON.
    Json,
    /// The document written back as Gramps XML.
    Xml,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "gramps-dump")]
#[command(about = "Parse a Gramps XML file and print its contents")]
pub struct DumpConfig {
    /// Gramps XML file to read, `-` for standard input.
    pub input: PathBuf,

    /// Output format.
    #[arg(short, long, env = "GRAMPS_OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Fail on documents declaring another namespace instead of warning.
    #[arg(long, env = "GRAMPS_STRICT_NAMESPACE", default_value = "false")]
    pub strict_namespace: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "GRAMPS_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Spaces per level in XML output, 0 for compact output.
    #[arg(long, env = "GRAMPS_INDENT", default_value = "2")]
    pub indent: usize,

    /// Handles to look up in the parsed document.
    #[arg(long = "resolve", value_name = "HANDLE")]
    pub resolve: Vec<String>,
}

impl DumpConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Log level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.resolve.iter().any(|handle| handle.trim().is_empty()) {
            errors.push("Handles passed to --resolve cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            namespace_policy: if self.strict_namespace {
                NamespacePolicy::Strict
            } else {
                NamespacePolicy::Lenient
            },
        }
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: (self.indent > 0).then_some(self.indent),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> DumpConfig {
        let mut argv = vec!["gramps-dump"];
        argv.extend_from_slice(args);
        DumpConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config(&["tree.gramps"]);
        assert_eq!(config.format, OutputFormat::Summary);
        assert!(!config.strict_namespace);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.parse_options().namespace_policy, NamespacePolicy::Lenient);
        assert_eq!(config.write_options().indent, Some(2));
        assert!(config.validate().is_ok());
        assert!(!config.reads_stdin());
    }

    #[test]
    fn test_flags() {
        let config = config(&[
            "-",
            "--format",
            "xml",
            "--strict-namespace",
            "--indent",
            "0",
            "--resolve",
            "_p1",
            "--resolve",
            "_f1",
        ]);
        assert!(config.reads_stdin());
        assert_eq!(config.format, OutputFormat::Xml);
        assert_eq!(config.parse_options().namespace_policy, NamespacePolicy::Strict);
        assert_eq!(config.write_options().indent, None);
        assert_eq!(config.resolve, ["_p1", "_f1"]);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = DumpConfig {
            log_level: "loud".to_string(),
            ..config(&["tree.gramps"])
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Log level")));
    }

    #[test]
    fn test_validate_empty_handle() {
        let config = config(&["tree.gramps", "--resolve", " "]);
        assert!(config.validate().is_err());
    }
}
