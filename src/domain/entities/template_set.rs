//! TemplateSet entity - the files known to a watch session
//!
//! Two disjoint, insertion-ordered collections: `layouts` and `templates`.
//! A path keeps the role it was first ingested with for the whole session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::FileRole;

/// Layouts and templates discovered so far
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    layouts: Vec<PathBuf>,
    templates: Vec<PathBuf>,
    roles: HashMap<PathBuf, FileRole>,
}

impl TemplateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path to the collection matching its role.
    ///
    /// Ingesting a path that is already known is a no-op and returns the
    /// role it was first assigned.
    pub fn ingest(&mut self, path: impl Into<PathBuf>, marker: &str) -> FileRole {
        let path = path.into();
        if let Some(role) = self.roles.get(&path) {
            return *role;
        }

        let role = FileRole::classify(&path, marker);
        match role {
            FileRole::Layout => self.layouts.push(path.clone()),
            FileRole::Template => self.templates.push(path.clone()),
        }
        self.roles.insert(path, role);
        role
    }

    /// Role of a known path
    pub fn role_of(&self, path: &Path) -> Option<FileRole> {
        self.roles.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.roles.contains_key(path)
    }

    /// Layouts in discovery order
    pub fn layouts(&self) -> &[PathBuf] {
        &self.layouts
    }

    /// Templates in discovery order
    pub fn templates(&self) -> &[PathBuf] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
