//! minijinja-backed template engine
//!
//! Templates are loaded by name from the input directory, so `extends`,
//! `include` and `import` resolve relative to it.

use std::error::Error as _;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::{Map, Value};

use crate::domain::entities::{EngineOptions, Settings};
use crate::domain::ports::template_engine::{
    EngineError, EngineResult, PrecompileOptions, TemplateEngine,
};
use crate::error::NjkResult;

use super::extensions;

/// Global object precompiled units register themselves in
pub const PRECOMPILED_GLOBAL: &str = "njkPrecompiled";

/// Template engine backed by a minijinja [`Environment`]
pub struct MinijinjaEngine {
    env: Environment<'static>,
    root: PathBuf,
    extensions: Vec<String>,
}

impl std::fmt::Debug for MinijinjaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinijinjaEngine")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl MinijinjaEngine {
    /// Engine loading templates from `root`
    pub fn new(root: &Path, options: &EngineOptions) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(root));
        env.set_trim_blocks(options.trim_blocks);
        env.set_lstrip_blocks(options.lstrip_blocks);
        env.set_keep_trailing_newline(options.keep_trailing_newline);
        if options.throw_on_undefined {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }

        let autoescape = options.autoescape;
        env.set_auto_escape_callback(move |_name| {
            if autoescape {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        Self {
            env,
            root: root.to_path_buf(),
            extensions: Vec::new(),
        }
    }

    /// Engine configured from settings, with every extension module loaded.
    ///
    /// Extension failures are fatal: a missing or malformed extension means
    /// the templates cannot be rendered as intended.
    pub fn from_settings(settings: &Settings) -> NjkResult<Self> {
        let mut engine = Self::new(settings.input_dir(), settings.engine());
        for reference in settings.extension_modules() {
            let loaded = extensions::load(reference)?;
            let ids = extensions::install(&mut engine.env, loaded);
            tracing::info!(reference = reference.reference(), ?ids, "registered extension");
            engine.extensions.extend(ids);
        }
        Ok(engine)
    }

    /// Identifiers registered by extensions, in load order
    pub fn registered_extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl TemplateEngine for MinijinjaEngine {
    fn render(&self, name: &str, context: &Map<String, Value>) -> EngineResult<String> {
        let template = self.env.get_template(name).map_err(engine_error)?;
        template.render(context).map_err(engine_error)
    }

    fn precompile(&self, name: &str, options: &PrecompileOptions) -> EngineResult<String> {
        let source = match self.env.get_template(name) {
            Ok(template) => template.source().to_string(),
            Err(err) if options.force => {
                tracing::warn!(template = name, error = %err, "bundling template that does not compile");
                std::fs::read_to_string(self.root.join(name))
                    .map_err(|e| EngineError::new(format!("{name}: {e}")))?
            }
            Err(err) => return Err(engine_error(err)),
        };
        compiled_unit(&options.name, &source)
    }

    fn reload(&mut self) {
        self.env.clear_templates();
    }
}

/// Script unit registering `source` under `name` in the precompiled global
pub fn compiled_unit(name: &str, source: &str) -> EngineResult<String> {
    let name = serde_json::to_string(name).map_err(|e| EngineError::new(e.to_string()))?;
    let source = serde_json::to_string(source).map_err(|e| EngineError::new(e.to_string()))?;
    Ok(format!(
        "(function() {{\n\
         (window.{PRECOMPILED_GLOBAL} = window.{PRECOMPILED_GLOBAL} || {{}})[{name}] = {source};\n\
         }})();\n"
    ))
}

fn engine_error(err: minijinja::Error) -> EngineError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    EngineError::new(message)
}
