//! Settings resolution: config file + CLI flags → [`Settings`]

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::domain::entities::{EngineOptions, Settings, SettingsParts};
use crate::domain::value_objects::{ExtensionRef, Mode, DEFAULT_LAYOUT_PREFIX};
use crate::error::NjkResult;

use super::loader::{load_context_file, load_with_warnings, ConfigWarning};
use super::types::ConfigFile;

/// Command-line input, before any file has been read
#[derive(Debug, Clone, Default)]
pub struct CliFlags {
    /// Glob pattern selecting templates
    pub pattern: String,
    /// JSON data file used as render context
    pub data_file: Option<PathBuf>,
    /// Template root (`--path`)
    pub path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub watch: bool,
    pub render: bool,
    /// Output extension override (`--extension`)
    pub extension: Option<String>,
    /// Extension module references (`--extensions`), in load order
    pub extensions: Vec<String>,
    /// Configuration file (`--options`)
    pub options: Option<PathBuf>,
    /// Disable autoescaping (`--unsafe`)
    pub unsafe_output: bool,
    pub layout_prefix: Option<String>,
}

/// Settings plus the warnings collected while resolving them
#[derive(Debug, Clone)]
pub struct Resolved {
    pub settings: Settings,
    pub warnings: Vec<ConfigWarning>,
}

/// Read the files the flags point at, snapshot the environment and resolve.
pub fn resolve_from_disk(flags: &CliFlags) -> NjkResult<Resolved> {
    let (config, warnings) = match &flags.options {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (Some(config), warnings)
        }
        None => (None, Vec::new()),
    };

    let data = flags
        .data_file
        .as_deref()
        .map(load_context_file)
        .transpose()?;

    let settings = resolve(flags, config.as_ref(), data, env_snapshot())?;
    Ok(Resolved { settings, warnings })
}

/// Merge configuration file contents with CLI flags.
///
/// For every option both can set, the configuration file wins. The `env`
/// key of the render context is always overwritten with `env`.
pub fn resolve(
    flags: &CliFlags,
    config: Option<&ConfigFile>,
    data: Option<Map<String, Value>>,
    env: Map<String, Value>,
) -> NjkResult<Settings> {
    let default_config = ConfigFile::default();
    let config = config.unwrap_or(&default_config);
    let compiler = &config.compiler;

    let input_dir = compiler
        .input_dir
        .clone()
        .or_else(|| flags.path.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let references = compiler
        .extensions
        .clone()
        .unwrap_or_else(|| flags.extensions.clone());
    let extension_modules = references
        .iter()
        .map(|reference| ExtensionRef::resolve(reference, &input_dir))
        .collect();

    let mut render_context = compiler
        .context
        .clone()
        .or(data)
        .unwrap_or_default();
    render_context.insert("env".to_string(), Value::Object(env));

    let engine = config.engine_options(EngineOptions {
        autoescape: !flags.unsafe_output,
        ..EngineOptions::default()
    });

    let parts = SettingsParts {
        output_dir: compiler.out_dir.clone().or_else(|| flags.out_dir.clone()),
        output_file: compiler.out_file.clone().or_else(|| flags.out_file.clone()),
        mode: Mode::from_render_flag(flags.render),
        output_extension: flags.extension.clone(),
        extension_modules,
        render_context,
        glob_pattern: flags.pattern.clone(),
        watch: flags.watch,
        engine,
        layout_prefix: compiler
            .layout_prefix
            .clone()
            .or_else(|| flags.layout_prefix.clone())
            .unwrap_or_else(|| DEFAULT_LAYOUT_PREFIX.to_string()),
        force: compiler.force.unwrap_or(false),
        input_dir,
    };

    let settings = Settings::new(parts)?;
    tracing::debug!(
        input_dir = %settings.input_dir().display(),
        mode = %settings.mode(),
        "resolved settings"
    );
    Ok(settings)
}

/// Snapshot of the process environment, taken once per run
pub fn env_snapshot() -> Map<String, Value> {
    std::env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                Value::String(value.to_string_lossy().into_owned()),
            )
        })
        .collect()
}

