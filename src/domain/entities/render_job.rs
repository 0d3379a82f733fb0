//! RenderJob entity - one file's unit of work within a render pass
//!
//! Jobs are created per file per pass and dropped as soon as the file has
//! been written; they are never queued across passes.

use std::path::{Path, PathBuf};

use crate::domain::entities::Settings;
use crate::domain::services::path_resolver;
use crate::domain::value_objects::Mode;

/// A single source-to-output job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Source path relative to the input directory
    source: PathBuf,
    /// Where the result goes
    output: PathBuf,
    mode: Mode,
}

impl RenderJob {
    /// Build the job for `source` under `settings`
    pub fn for_source(source: impl Into<PathBuf>, settings: &Settings) -> Self {
        let source = source.into();
        let output = path_resolver::output_path_for(&source, settings);
        Self {
            source,
            output,
            mode: settings.mode(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Engine-facing template name: the source path with `/` separators
    pub fn template_name(&self) -> String {
        path_resolver::template_name(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SettingsParts;

    #[test]
    fn job_carries_mode_and_output() {
        let mut parts = SettingsParts::new("src", "**/*.njk");
        parts.mode = Mode::Render;
        parts.output_dir = Some(PathBuf::from("dist"));
        let settings = Settings::new(parts).unwrap();

        let job = RenderJob::for_source("blog/post.njk", &settings);
        assert_eq!(job.source(), Path::new("blog/post.njk"));
        assert_eq!(job.output(), Path::new("dist/blog/post.html"));
        assert_eq!(job.mode(), Mode::Render);
        assert_eq!(job.template_name(), "blog/post.njk");
    }
}
