//! Glob expansion over the input directory
//!
//! Patterns use gitignore glob syntax via `ignore`'s override matcher. A
//! pattern without a `/` is anchored at the root (`*.njk` only matches
//! top-level files) so it behaves like a shell glob; use `**/*.njk` to
//! descend. Dot-files and dot-directories are skipped unless a pattern
//! component itself starts with `.` (`.well-known/*.njk`, `**/.*.njk`).

use std::path::{Component, Path, PathBuf};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;

use crate::error::{NjkError, NjkResult};

/// Options for [`glob`]
#[derive(Debug, Clone)]
pub struct GlobOptions {
    /// Directory the pattern is matched against; results are relative to it
    pub cwd: PathBuf,
    /// Patterns excluded from the result
    pub ignore: Vec<String>,
}

impl GlobOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ignore: Vec::new(),
        }
    }

    /// Exclude layout files (`**/<marker>*.*`)
    pub fn excluding_layouts(mut self, marker: &str) -> Self {
        if !marker.is_empty() {
            self.ignore.push(layout_ignore_pattern(marker));
        }
        self
    }
}

/// Default exclusion pattern for layout files
pub fn layout_ignore_pattern(marker: &str) -> String {
    format!("**/{marker}*.*")
}

/// Matches paths relative to a root against a pattern and its exclusions
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    overrides: Override,
    include_hidden: bool,
}

impl TemplateMatcher {
    pub fn new(root: &Path, pattern: &str, ignore: &[String]) -> NjkResult<Self> {
        let glob_error = |e: ignore::Error| NjkError::Glob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        };

        let mut builder = OverrideBuilder::new(root);
        builder.add(&normalize_pattern(pattern)).map_err(glob_error)?;
        for excluded in ignore {
            builder
                .add(&format!("!{}", normalize_pattern(excluded)))
                .map_err(glob_error)?;
        }
        let overrides = builder.build().map_err(glob_error)?;

        Ok(Self {
            overrides,
            include_hidden: names_hidden(pattern),
        })
    }

    /// Whether a file path (relative to the root) is selected
    pub fn is_match(&self, relative: &Path) -> bool {
        if !self.include_hidden && is_hidden(relative) {
            return false;
        }
        self.overrides.matched(relative, false).is_whitelist()
    }
}

/// Expand `pattern` under `options.cwd`.
///
/// Returns paths relative to `cwd`, sorted for a stable render order.
/// `.gitignore` rules are not applied; dot-entries are walked only when the
/// pattern names them.
pub fn glob(pattern: &str, options: &GlobOptions) -> NjkResult<Vec<PathBuf>> {
    let matcher = TemplateMatcher::new(&options.cwd, pattern, &options.ignore)?;
    let walker = WalkBuilder::new(&options.cwd)
        .standard_filters(false)
        .hidden(!matcher.include_hidden)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| NjkError::Glob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&options.cwd) else {
            continue;
        };
        if matcher.is_match(relative) {
            matches.push(relative.to_path_buf());
        }
    }

    tracing::debug!(pattern, count = matches.len(), "expanded glob");
    Ok(matches)
}

fn names_hidden(pattern: &str) -> bool {
    pattern
        .split('/')
        .any(|part| part.starts_with('.') && part != "." && part != "..")
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(part) => part.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn normalize_pattern(pattern: &str) -> String {
    let trimmed = pattern.trim_start_matches("./");
    if trimmed.contains('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
