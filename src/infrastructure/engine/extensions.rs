//! Template engine extensions
//!
//! Extensions plug into the engine through the [`Extension`] trait. A
//! reference from `--extensions` resolves to one of two shapes:
//!
//! - a built-in extension (a single factory), registered under its id
//! - a JSON module file exporting an object; every key is registered as its
//!   own global
//!
//! Any other shape is rejected with `UnknownExtensionType`.

use std::path::Path;

use chrono::{DateTime, NaiveDate};
use heck::ToKebabCase;
use minijinja::{Environment, Error, ErrorKind};
use serde_json::Value;

use crate::domain::value_objects::ExtensionRef;
use crate::error::{NjkError, NjkResult};

/// A capability that registers filters, functions or globals with the engine
pub trait Extension: Send + Sync {
    /// Identifier the extension is registered under
    fn id(&self) -> &'static str;

    /// Register everything this extension provides
    fn register(&self, env: &mut Environment<'static>);
}

/// What an extension reference resolved to
pub enum LoadedExtension {
    /// A single extension, registered under its own id
    Factory(Box<dyn Extension>),
    /// Named exports, each registered under its key
    Mapping(Vec<(String, Value)>),
}

impl std::fmt::Debug for LoadedExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadedExtension::Factory(ext) => f.debug_tuple("Factory").field(&ext.id()).finish(),
            LoadedExtension::Mapping(entries) => f
                .debug_tuple("Mapping")
                .field(&entries.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Names of the built-in extensions
pub const BUILTIN_EXTENSIONS: &[&str] = &["datetime", "paths", "strings"];

/// Look up a built-in extension by name
pub fn builtin(name: &str) -> Option<Box<dyn Extension>> {
    match name {
        "datetime" => Some(Box::new(DateTimeExtension)),
        "paths" => Some(Box::new(PathsExtension)),
        "strings" => Some(Box::new(StringsExtension)),
        _ => None,
    }
}

/// Resolve a reference to a loadable extension
pub fn load(reference: &ExtensionRef) -> NjkResult<LoadedExtension> {
    match reference {
        ExtensionRef::Builtin(name) => {
            builtin(name)
                .map(LoadedExtension::Factory)
                .ok_or_else(|| NjkError::ExtensionNotFound {
                    reference: name.clone(),
                    message: format!("available extensions: {}", BUILTIN_EXTENSIONS.join(", ")),
                })
        }
        ExtensionRef::File { reference, path } => load_module_file(reference, path),
    }
}

fn load_module_file(reference: &str, path: &Path) -> NjkResult<LoadedExtension> {
    let content = std::fs::read_to_string(path).map_err(|e| NjkError::ExtensionNotFound {
        reference: reference.to_string(),
        message: format!("{}: {}", path.display(), e),
    })?;

    let exported: Value =
        serde_json::from_str(&content).map_err(|e| NjkError::UnknownExtensionType {
            reference: reference.to_string(),
            found: format!("unparseable module ({e})"),
        })?;

    match exported {
        Value::Object(entries) => Ok(LoadedExtension::Mapping(entries.into_iter().collect())),
        other => Err(NjkError::UnknownExtensionType {
            reference: reference.to_string(),
            found: json_kind(&other).to_string(),
        }),
    }
}

/// Register a loaded extension; returns the identifiers it was registered under
pub fn install(env: &mut Environment<'static>, loaded: LoadedExtension) -> Vec<String> {
    match loaded {
        LoadedExtension::Factory(ext) => {
            ext.register(env);
            vec![ext.id().to_string()]
        }
        LoadedExtension::Mapping(entries) => entries
            .into_iter()
            .map(|(name, value)| {
                env.add_global(name.clone(), minijinja::Value::from_serialize(&value));
                name
            })
            .collect(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `now()` global and `date` filter
struct DateTimeExtension;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

impl Extension for DateTimeExtension {
    fn id(&self) -> &'static str {
        "datetime"
    }

    fn register(&self, env: &mut Environment<'static>) {
        env.add_function("now", |format: Option<String>| -> String {
            let format = format.unwrap_or_else(|| "%Y-%m-%dT%H:%M:%S%:z".to_string());
            chrono::Local::now().format(&format).to_string()
        });
        env.add_filter("date", format_date);
    }
}

fn format_date(value: String, format: Option<String>) -> Result<String, Error> {
    let format = format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&value) {
        return Ok(parsed.format(&format).to_string());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        return Ok(parsed.format(&format).to_string());
    }
    Err(Error::new(
        ErrorKind::InvalidOperation,
        format!("cannot parse '{value}' as a date"),
    ))
}

/// `basename`, `dirname` and `extname` filters
struct PathsExtension;

impl Extension for PathsExtension {
    fn id(&self) -> &'static str {
        "paths"
    }

    fn register(&self, env: &mut Environment<'static>) {
        env.add_filter("basename", |value: String| -> String {
            Path::new(&value)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        env.add_filter("dirname", |value: String| -> String {
            Path::new(&value)
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        env.add_filter("extname", |value: String| -> String {
            Path::new(&value)
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default()
        });
    }
}

/// `slugify` and `wordcount` filters
struct StringsExtension;

impl Extension for StringsExtension {
    fn id(&self) -> &'static str {
        "strings"
    }

    fn register(&self, env: &mut Environment<'static>) {
        env.add_filter("slugify", |value: String| -> String { slugify(&value) });
        env.add_filter("wordcount", |value: String| -> usize {
            value.split_whitespace().count()
        });
    }
}

fn slugify(value: &str) -> String {
    value.to_kebab_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn render(env: &Environment<'static>, source: &str) -> String {
        env.render_str(source, minijinja::context! {}).unwrap()
    }

    #[test]
    fn unknown_builtin_is_not_found() {
        let err = load(&ExtensionRef::Builtin("nope".to_string())).unwrap_err();
        assert!(matches!(err, NjkError::ExtensionNotFound { .. }));
    }

    #[test]
    fn builtin_registers_under_its_id() {
        let mut env = Environment::new();
        let loaded = load(&ExtensionRef::Builtin("strings".to_string())).unwrap();
        assert_eq!(install(&mut env, loaded), vec!["strings".to_string()]);
        assert_eq!(render(&env, "{{ 'Hello, World!' | slugify }}"), "hello-world");
        assert_eq!(render(&env, "{{ 'one two  three' | wordcount }}"), "3");
    }

    #[test]
    fn paths_filters() {
        let mut env = Environment::new();
        install(&mut env, load(&ExtensionRef::Builtin("paths".to_string())).unwrap());
        assert_eq!(render(&env, "{{ 'blog/post.njk' | basename }}"), "post.njk");
        assert_eq!(render(&env, "{{ 'blog/post.njk' | dirname }}"), "blog");
        assert_eq!(render(&env, "{{ 'blog/post.njk' | extname }}"), ".njk");
    }

    #[test]
    fn date_filter_formats_iso_dates() {
        let mut env = Environment::new();
        install(&mut env, load(&ExtensionRef::Builtin("datetime".to_string())).unwrap());
        assert_eq!(
            render(&env, "{{ '2024-03-09' | date('%d/%m/%Y') }}"),
            "09/03/2024"
        );
        assert_eq!(
            render(&env, "{{ '2024-03-09T10:30:00+00:00' | date }}"),
            "2024-03-09"
        );
        assert!(env
            .render_str("{{ 'yesterday' | date }}", minijinja::context! {})
            .is_err());
    }

    #[test]
    fn json_object_module_exports_each_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"site": {"name": "Example"}, "year": 2024}"#).unwrap();

        let reference = ExtensionRef::File {
            reference: "./site.json".to_string(),
            path,
        };
        let mut env = Environment::new();
        let mut ids = install(&mut env, load(&reference).unwrap());
        ids.sort();
        assert_eq!(ids, vec!["site".to_string(), "year".to_string()]);
        assert_eq!(render(&env, "{{ site.name }} {{ year }}"), "Example 2024");
    }

    #[test]
    fn non_object_module_is_unknown_extension_type() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load(&ExtensionRef::File {
            reference: "./list.json".to_string(),
            path,
        })
        .unwrap_err();
        match err {
            NjkError::UnknownExtensionType { found, .. } => assert_eq!(found, "array"),
            other => panic!("expected UnknownExtensionType, got {other:?}"),
        }
    }

    #[test]
    fn missing_module_file_is_not_found() {
        let err = load(&ExtensionRef::File {
            reference: "./missing.json".to_string(),
            path: PathBuf::from("/definitely/missing.json"),
        })
        .unwrap_err();
        assert!(matches!(err, NjkError::ExtensionNotFound { .. }));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Rust -- Templates  "), "rust-templates");
        assert_eq!(slugify("Ünïcode Title"), "ünïcode-title");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("HelloWorld 2024"), "hello-world-2024");
    }
}
