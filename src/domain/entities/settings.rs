//! Settings entity - the resolved, immutable configuration of one run
//!
//! Built once by [`crate::config::resolve`] and never mutated afterwards.
//! Construction enforces that a bundle file (`output_file`) is never
//! combined with render mode.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::value_objects::{ExtensionRef, Mode, DEFAULT_LAYOUT_PREFIX};
use crate::error::{NjkError, NjkResult};

/// Options handed to the template engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// HTML-escape interpolated values
    pub autoescape: bool,
    /// Fail on undefined variables instead of rendering them empty
    pub throw_on_undefined: bool,
    /// Remove the first newline after a block tag
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag
    pub lstrip_blocks: bool,
    /// Keep the trailing newline of a template
    pub keep_trailing_newline: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            autoescape: true,
            throw_on_undefined: false,
            trim_blocks: false,
            lstrip_blocks: false,
            keep_trailing_newline: false,
        }
    }
}

/// Raw ingredients of [`Settings`], before validation
#[derive(Debug, Clone)]
pub struct SettingsParts {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub mode: Mode,
    /// `None` selects the mode's default extension
    pub output_extension: Option<String>,
    pub extension_modules: Vec<ExtensionRef>,
    pub render_context: Map<String, Value>,
    pub glob_pattern: String,
    pub watch: bool,
    pub engine: EngineOptions,
    pub layout_prefix: String,
    pub force: bool,
}

impl SettingsParts {
    /// Minimal parts for a pattern rooted at `input_dir`
    pub fn new(input_dir: impl Into<PathBuf>, glob_pattern: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            output_file: None,
            mode: Mode::default(),
            output_extension: None,
            extension_modules: Vec::new(),
            render_context: Map::new(),
            glob_pattern: glob_pattern.into(),
            watch: false,
            engine: EngineOptions::default(),
            layout_prefix: DEFAULT_LAYOUT_PREFIX.to_string(),
            force: false,
        }
    }
}

/// Immutable settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    input_dir: PathBuf,
    output_dir: Option<PathBuf>,
    output_file: Option<PathBuf>,
    mode: Mode,
    output_extension: String,
    extension_modules: Vec<ExtensionRef>,
    render_context: Map<String, Value>,
    glob_pattern: String,
    watch: bool,
    engine: EngineOptions,
    layout_prefix: String,
    force: bool,
}

impl Settings {
    /// Validate parts into settings.
    ///
    /// Fails with `ConfigConflict` when `output_file` is set in render mode.
    pub fn new(parts: SettingsParts) -> NjkResult<Self> {
        if parts.mode.is_render() && parts.output_file.is_some() {
            return Err(NjkError::ConfigConflict {
                message: "--outFile can only be used when precompiling (drop --render)".to_string(),
            });
        }

        let output_extension = parts
            .output_extension
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| parts.mode.default_extension().to_string());

        Ok(Self {
            input_dir: parts.input_dir,
            output_dir: parts.output_dir,
            output_file: parts.output_file,
            mode: parts.mode,
            output_extension,
            extension_modules: parts.extension_modules,
            render_context: parts.render_context,
            glob_pattern: parts.glob_pattern,
            watch: parts.watch,
            engine: parts.engine,
            layout_prefix: parts.layout_prefix,
            force: parts.force,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Extension of derived outputs, without the leading dot
    pub fn output_extension(&self) -> &str {
        &self.output_extension
    }

    pub fn extension_modules(&self) -> &[ExtensionRef] {
        &self.extension_modules
    }

    /// Render context, including the `env` snapshot
    pub fn render_context(&self) -> &Map<String, Value> {
        &self.render_context
    }

    pub fn glob_pattern(&self) -> &str {
        &self.glob_pattern
    }

    /// Whether watching was requested (see [`Settings::watch_enabled`])
    pub fn watch_requested(&self) -> bool {
        self.watch
    }

    /// Watching only happens in render mode; precompile batches are one-shot
    pub fn watch_enabled(&self) -> bool {
        self.watch && self.mode.is_render()
    }

    pub fn engine(&self) -> &EngineOptions {
        &self.engine
    }

    pub fn layout_prefix(&self) -> &str {
        &self.layout_prefix
    }

    pub fn force(&self) -> bool {
        self.force
    }
}
