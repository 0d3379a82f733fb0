//! Extension reference value object
//!
//! An entry of `--extensions` / `compiler.extensions` is either the name of
//! a built-in extension or a path to an extension module file.

use std::path::{Path, PathBuf};

/// A resolved reference to an extension module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionRef {
    /// Built-in extension looked up by name
    Builtin(String),
    /// Extension module file; `reference` is what the user wrote
    File { reference: String, path: PathBuf },
}

impl ExtensionRef {
    /// Resolve a user-supplied reference.
    ///
    /// References starting with `./` or `../` are resolved against
    /// `input_dir` so extension modules can live next to the templates.
    /// Other paths (absolute, or anything ending in `.json`) stay as given.
    pub fn resolve(reference: &str, input_dir: &Path) -> Self {
        if is_relative_marker(reference) {
            return ExtensionRef::File {
                reference: reference.to_string(),
                path: input_dir.join(reference),
            };
        }

        let as_path = Path::new(reference);
        if as_path.is_absolute() || reference.ends_with(".json") {
            return ExtensionRef::File {
                reference: reference.to_string(),
                path: as_path.to_path_buf(),
            };
        }

        ExtensionRef::Builtin(reference.to_string())
    }

    /// What the user wrote
    pub fn reference(&self) -> &str {
        match self {
            ExtensionRef::Builtin(name) => name,
            ExtensionRef::File { reference, .. } => reference,
        }
    }
}

fn is_relative_marker(reference: &str) -> bool {
    ["./", "../", ".\\", "..\\"]
        .iter()
        .any(|marker| reference.starts_with(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_is_builtin() {
        assert_eq!(
            ExtensionRef::resolve("datetime", Path::new("src")),
            ExtensionRef::Builtin("datetime".to_string())
        );
    }

    #[test]
    fn relative_reference_resolves_against_input_dir() {
        let resolved = ExtensionRef::resolve("./globals.json", Path::new("src"));
        assert_eq!(
            resolved,
            ExtensionRef::File {
                reference: "./globals.json".to_string(),
                path: Path::new("src").join("./globals.json"),
            }
        );

        let parent = ExtensionRef::resolve("../shared/site.json", Path::new("src"));
        match parent {
            ExtensionRef::File { path, .. } => {
                assert_eq!(path, Path::new("src").join("../shared/site.json"))
            }
            other => panic!("expected file reference, got {other:?}"),
        }
    }

    #[test]
    fn plain_json_path_is_not_rerooted() {
        let resolved = ExtensionRef::resolve("config/site.json", Path::new("src"));
        assert_eq!(
            resolved,
            ExtensionRef::File {
                reference: "config/site.json".to_string(),
                path: PathBuf::from("config/site.json"),
            }
        );
    }

    #[test]
    fn reference_returns_original_text() {
        assert_eq!(
            ExtensionRef::resolve("./a.json", Path::new("x")).reference(),
            "./a.json"
        );
        assert_eq!(ExtensionRef::resolve("paths", Path::new("x")).reference(), "paths");
    }
}
