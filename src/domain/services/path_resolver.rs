//! Output path derivation
//!
//! Pure functions: the same `(source, settings)` always yields the same
//! path, and nothing here touches the file system. Directory creation
//! happens when the output is written.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::Settings;

/// Output path for a source template.
///
/// - precompile with a bundle file: every source maps to the bundle
/// - otherwise: the extension is replaced by `settings.output_extension()`
///   and the path relative to the input directory is re-rooted under the
///   output directory (or the input directory when none is set)
pub fn output_path_for(source: &Path, settings: &Settings) -> PathBuf {
    if !settings.mode().is_render() {
        if let Some(bundle) = settings.output_file() {
            return bundle.to_path_buf();
        }
    }

    let relative = relative_to_input(source, settings.input_dir());
    let root = settings.output_dir().unwrap_or(settings.input_dir());
    root.join(relative.with_extension(settings.output_extension()))
}

/// Path of `source` relative to the input directory.
///
/// Sources produced by the glob are already relative; an absolute path is
/// stripped of the input directory prefix when it lives under it. The
/// comparison is lexical, so callers holding resolved paths must pass a
/// resolved input directory too.
pub fn relative_to_input(source: &Path, input_dir: &Path) -> PathBuf {
    if source.is_absolute() {
        if let Ok(stripped) = source.strip_prefix(input_dir) {
            return stripped.to_path_buf();
        }
    }
    source.to_path_buf()
}

/// Template name as the engine knows it: normal components joined by `/`
pub fn template_name(source: &Path) -> String {
    source
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
