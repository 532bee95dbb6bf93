//! metac_options: metac.json parsing and translator options.
//!
//! Parses `metac.json` project files and provides the `TranslatorOptions`
//! structure the driver and CLI share.

mod discover;

pub use discover::{discover_source_files, SOURCE_EXTENSION};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The default project file name.
pub const CONFIG_FILE_NAME: &str = "metac.json";

/// Translator options, matching the `translatorOptions` object of metac.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorOptions {
    // -- Output --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit_on_error: Option<bool>,

    // -- Translation --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_compat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_else_clauses: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_overrides: Option<IndexMap<String, String>>,
}

impl TranslatorOptions {
    pub fn out_extension(&self) -> &str {
        self.out_extension.as_deref().unwrap_or("java")
    }

    pub fn is_strict_compat(&self) -> bool {
        self.strict_compat.unwrap_or(false)
    }

    /// Else clauses are written unless disabled explicitly or by strict
    /// compatibility.
    pub fn emits_else_clauses(&self) -> bool {
        self.emit_else_clauses.unwrap_or(!self.is_strict_compat())
    }

    pub fn is_no_emit(&self) -> bool {
        self.no_emit.unwrap_or(false)
    }

    pub fn is_no_emit_on_error(&self) -> bool {
        self.no_emit_on_error.unwrap_or(false)
    }
}

/// The metac.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetacConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_options: Option<TranslatorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl MetacConfig {
    /// The configuration `metac --init` writes.
    pub fn init_template() -> Self {
        Self {
            translator_options: Some(TranslatorOptions {
                out_dir: Some("out".to_string()),
                root_dir: Some("src".to_string()),
                out_extension: Some("java".to_string()),
                strict_compat: Some(false),
                emit_else_clauses: Some(true),
                no_emit_on_error: Some(false),
                ..TranslatorOptions::default()
            }),
            files: None,
            include: Some(vec!["src".to_string()]),
            exclude: Some(vec!["out".to_string()]),
        }
    }

    pub fn options(&self) -> TranslatorOptions {
        self.translator_options.clone().unwrap_or_default()
    }

    /// The project's source files, with entries resolved against `root_dir`.
    pub fn source_files(&self, root_dir: &Path) -> Vec<PathBuf> {
        discover_source_files(
            root_dir,
            self.include.as_deref().unwrap_or_default(),
            self.exclude.as_deref().unwrap_or_default(),
            self.files.as_deref(),
        )
    }
}

/// Errors reading a project file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse metac.json content.
pub fn parse_config(content: &str) -> Result<MetacConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a metac.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<MetacConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "loaded project file");
    Ok(config)
}

/// Serialize a config the way `metac --init` writes it.
pub fn to_config_string(config: &MetacConfig) -> Result<String, ConfigError> {
    let mut text = serde_json::to_string_pretty(config)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"{
                "translatorOptions": {
                    "outDir": "out",
                    "rootDir": "src",
                    "outExtension": "txt",
                    "strictCompat": true,
                    "noEmitOnError": true,
                    "identifierOverrides": { "Count": "size", "Add": "add" }
                },
                "include": ["src"],
                "exclude": ["build"]
            }"#,
        )
        .unwrap();

        let options = config.options();
        assert_eq!(options.out_dir.as_deref(), Some("out"));
        assert_eq!(options.out_extension(), "txt");
        assert!(options.is_strict_compat());
        assert!(!options.emits_else_clauses());
        assert!(options.is_no_emit_on_error());

        let overrides: Vec<_> = options.identifier_overrides.unwrap().into_iter().collect();
        assert_eq!(
            overrides,
            vec![("Count".to_string(), "size".to_string()), ("Add".to_string(), "add".to_string())]
        );
        assert_eq!(config.include, Some(vec!["src".to_string()]));
        assert_eq!(config.files, None);
    }

    #[test]
    fn test_defaults() {
        let options = parse_config("{}").unwrap().options();
        assert_eq!(options.out_extension(), "java");
        assert!(!options.is_strict_compat());
        assert!(options.emits_else_clauses());
        assert!(!options.is_no_emit());
    }

    #[test]
    fn test_explicit_else_setting_wins_over_strict_compat() {
        let options = parse_config(r#"{ "translatorOptions": { "strictCompat": true, "emitElseClauses": true } }"#)
            .unwrap()
            .options();
        assert!(options.emits_else_clauses());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(parse_config("{ not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            parse_config(r#"{ "translatorOptions": { "strictCompat": "yes" } }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = parse_config_file(Path::new("/nonexistent/metac.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/metac.json"));
    }

    #[test]
    fn test_init_template_round_trips() {
        let json = to_config_string(&MetacConfig::init_template()).unwrap();
        assert!(json.contains("\"translatorOptions\""));
        assert!(json.contains("\"outDir\": \"out\""));
        assert_eq!(parse_config(&json).unwrap(), MetacConfig::init_template());
    }
}
