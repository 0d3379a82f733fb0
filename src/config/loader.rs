//! Configuration loading
//!
//! Unknown keys are collected as warnings instead of failing the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{NjkError, NjkResult};

use super::types::ConfigFile;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (`compiler.outdir`)
    pub key: String,
    pub file: PathBuf,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown configuration key '{}' in {}",
            self.key,
            self.file.display()
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a configuration file and collect non-fatal warnings.
pub fn load_with_warnings(path: &Path) -> NjkResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| NjkError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for messages.
pub fn parse_with_warnings(content: &str, path: &Path) -> NjkResult<(ConfigFile, Vec<ConfigWarning>)> {
    let parse_error = |e: serde_json::Error| NjkError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let config: ConfigFile = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(parse_error)?;
    deserializer.end().map_err(parse_error)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let suggestion = suggest_key(&key);
            ConfigWarning {
                key,
                file: path.to_path_buf(),
                suggestion,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load a JSON data file used as render context
pub fn load_context_file(path: &Path) -> NjkResult<Map<String, Value>> {
    let parse_error = |message: String| NjkError::ConfigParse {
        file: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    match serde_json::from_str::<Value>(&content).map_err(|e| parse_error(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Err(parse_error("data file must contain a JSON object".to_string())),
    }
}

const KNOWN_KEYS: &[&str] = &[
    "autoescape",
    "throwOnUndefined",
    "trimBlocks",
    "lstripBlocks",
    "keepTrailingNewline",
    "compiler",
    "inputDir",
    "outDir",
    "outFile",
    "extensions",
    "context",
    "layoutPrefix",
    "force",
];

/// Suggest the known key an unknown one most likely meant (case slips).
fn suggest_key(path: &str) -> Option<String> {
    let key = path.rsplit('.').next().unwrap_or(path);
    KNOWN_KEYS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(key) && **known != key)
        .map(|known| known.to_string())
}
