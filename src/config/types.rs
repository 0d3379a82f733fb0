//! Configuration file type definitions
//!
//! The file mirrors the template engine's own options at the top level and
//! carries the command-line settings in a nested `compiler` object:
//!
//! ```json
//! {
//!   "autoescape": true,
//!   "trimBlocks": true,
//!   "compiler": { "inputDir": "src", "outDir": "dist", "extensions": ["datetime"] }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::EngineOptions;

/// Parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub autoescape: Option<bool>,
    pub throw_on_undefined: Option<bool>,
    pub trim_blocks: Option<bool>,
    pub lstrip_blocks: Option<bool>,
    pub keep_trailing_newline: Option<bool>,

    #[serde(default)]
    pub compiler: CompilerConfig,
}

/// Options that override command-line flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    pub input_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub context: Option<Map<String, Value>>,
    pub layout_prefix: Option<String>,
    pub force: Option<bool>,
}

impl ConfigFile {
    /// Engine options, falling back to `defaults` for anything unset
    pub fn engine_options(&self, defaults: EngineOptions) -> EngineOptions {
        EngineOptions {
            autoescape: self.autoescape.unwrap_or(defaults.autoescape),
            throw_on_undefined: self
                .throw_on_undefined
                .unwrap_or(defaults.throw_on_undefined),
            trim_blocks: self.trim_blocks.unwrap_or(defaults.trim_blocks),
            lstrip_blocks: self.lstrip_blocks.unwrap_or(defaults.lstrip_blocks),
            keep_trailing_newline: self
                .keep_trailing_newline
                .unwrap_or(defaults.keep_trailing_newline),
        }
    }
}
