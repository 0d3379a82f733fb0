//! File role value object - layout/partial vs regular template
//!
//! The role is a pure function of the file name: a basename starting with
//! the layout marker (conventionally `_`) is a layout.

use std::path::Path;

use serde::Serialize;

/// Default marker that flags a file as a layout/partial
pub const DEFAULT_LAYOUT_PREFIX: &str = "_";

/// Role of a discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    /// Included or extended by other templates; never rendered on its own
    Layout,
    /// Rendered to its own output file
    Template,
}

impl FileRole {
    /// Classify a path by its basename.
    ///
    /// An empty marker classifies everything as a template.
    pub fn classify(path: &Path, marker: &str) -> Self {
        let is_layout = !marker.is_empty()
            && path
                .file_name()
                .map(|name| name.to_string_lossy().starts_with(marker))
                .unwrap_or(false);

        if is_layout {
            FileRole::Layout
        } else {
            FileRole::Template
        }
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, FileRole::Layout)
    }
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileRole::Layout => write!(f, "layout"),
            FileRole::Template => write!(f, "template"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn underscore_prefix_is_layout() {
        assert_eq!(
            FileRole::classify(Path::new("_base.njk"), DEFAULT_LAYOUT_PREFIX),
            FileRole::Layout
        );
        assert_eq!(
            FileRole::classify(Path::new("index.njk"), DEFAULT_LAYOUT_PREFIX),
            FileRole::Template
        );
    }

    #[test]
    fn only_basename_counts() {
        assert_eq!(
            FileRole::classify(Path::new("_partials/card.njk"), "_"),
            FileRole::Template
        );
        assert_eq!(
            FileRole::classify(Path::new("pages/_nav.njk"), "_"),
            FileRole::Layout
        );
    }

    #[test]
    fn custom_marker() {
        assert_eq!(
            FileRole::classify(Path::new("layout.base.njk"), "layout."),
            FileRole::Layout
        );
        assert_eq!(
            FileRole::classify(Path::new("_base.njk"), "layout."),
            FileRole::Template
        );
    }

    #[test]
    fn empty_marker_never_matches() {
        assert_eq!(FileRole::classify(Path::new("_base.njk"), ""), FileRole::Template);
    }

    proptest! {
        #[test]
        fn layout_iff_basename_starts_with_marker(
            dir in "[a-z]{1,8}",
            stem in "_?[a-z]{1,8}",
        ) {
            let path = Path::new(&dir).join(format!("{stem}.njk"));
            let role = FileRole::classify(&path, "_");
            prop_assert_eq!(role.is_layout(), stem.starts_with('_'));
        }
    }
}
