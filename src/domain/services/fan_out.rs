//! Re-render fan-out policy
//!
//! There is no dependency graph between templates, so a change to any
//! layout conservatively re-renders every known template, while a change
//! to a template re-renders just that template.

use std::path::{Path, PathBuf};

use crate::domain::entities::TemplateSet;
use crate::domain::value_objects::FileRole;

/// Templates to pass to a single render pass after `changed` was modified.
///
/// Returns `None` for paths the session does not know about.
pub fn plan_change(changed: &Path, set: &TemplateSet) -> Option<Vec<PathBuf>> {
    match set.role_of(changed)? {
        FileRole::Layout => Some(set.templates().to_vec()),
        FileRole::Template => Some(vec![changed.to_path_buf()]),
    }
}

/// Render passes for a debounced batch of changes, in execution order.
///
/// A layout anywhere in the batch collapses the batch into one full pass;
/// otherwise each changed template gets its own pass in batch order.
pub fn plan_batch(changes: &[PathBuf], set: &TemplateSet) -> Vec<Vec<PathBuf>> {
    let layout_changed = changes
        .iter()
        .any(|path| set.role_of(path).is_some_and(|role| role.is_layout()));

    if layout_changed {
        let everything = set.templates().to_vec();
        return if everything.is_empty() {
            Vec::new()
        } else {
            vec![everything]
        };
    }

    let mut passes: Vec<Vec<PathBuf>> = Vec::new();
    for path in changes {
        if let Some(pass) = plan_change(path, set) {
            if !passes.contains(&pass) {
                passes.push(pass);
            }
        }
    }
    passes
}
