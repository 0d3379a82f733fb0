//! Render Use Case implementation

use std::path::{Path, PathBuf};

use crate::application::RunEvent;
use crate::domain::entities::{RenderJob, Settings};
use crate::domain::ports::{FileSystem, FsError, PrecompileOptions, TemplateEngine};
use crate::domain::value_objects::Mode;
use crate::error::{NjkError, NjkResult};
use crate::infrastructure::glob::{glob, GlobOptions};

use super::result::{RenderFailure, RenderReport, RenderedFile};

/// Render Use Case
///
/// Owns the settings and both collaborators for the lifetime of the run.
/// The watch controller drives further passes through the same instance.
pub struct RenderUseCase<E, F>
where
    E: TemplateEngine,
    F: FileSystem,
{
    settings: Settings,
    engine: E,
    fs: F,
}

impl<E, F> RenderUseCase<E, F>
where
    E: TemplateEngine,
    F: FileSystem,
{
    pub fn new(settings: Settings, engine: E, fs: F) -> Self {
        Self {
            settings,
            engine,
            fs,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Render every template matching the configured pattern, layouts excluded
    pub fn render_matching(&mut self, on_event: &impl Fn(RunEvent)) -> NjkResult<RenderReport> {
        let options = GlobOptions::new(self.settings.input_dir())
            .excluding_layouts(self.settings.layout_prefix());
        let paths = glob(self.settings.glob_pattern(), &options)?;
        if paths.is_empty() {
            tracing::warn!(
                pattern = self.settings.glob_pattern(),
                input_dir = %self.settings.input_dir().display(),
                "no templates matched"
            );
        }
        Ok(self.render_all(&paths, on_event))
    }

    /// Run one pass over `paths` (relative to the input directory), in order
    pub fn render_all(&mut self, paths: &[PathBuf], on_event: &impl Fn(RunEvent)) -> RenderReport {
        self.engine.reload();

        let mode = self.settings.mode();
        on_event(RunEvent::RenderStarted {
            files: paths.len(),
            mode: mode.to_string(),
        });

        let bundle = self.bundle_path().map(Path::to_path_buf);
        let mut report = RenderReport::new();

        // Appending after a failed truncation would keep the previous run's units
        if let Some(bundle) = &bundle {
            if let Err(e) = self.fs.write(bundle, b"") {
                tracing::warn!(bundle = %bundle.display(), error = %e, "cannot truncate bundle");
                let message = format!("cannot truncate bundle {}: {}", bundle.display(), e);
                for path in paths {
                    on_event(RunEvent::FileFailed {
                        source: path.display().to_string(),
                        message: message.clone(),
                    });
                    report.failures.push(RenderFailure {
                        source: path.clone(),
                        error: NjkError::Compile {
                            path: path.clone(),
                            message: message.clone(),
                        },
                    });
                }
                return self.finish(mode, report, on_event);
            }
        }

        for path in paths {
            let job = RenderJob::for_source(path, &self.settings);
            let outcome = match job.mode() {
                Mode::Render => self.render_one(&job),
                Mode::Precompile => self.precompile_one(&job, bundle.is_some()),
            };

            match outcome {
                Ok(()) => {
                    tracing::debug!(
                        source = %job.source().display(),
                        output = %job.output().display(),
                        "wrote output"
                    );
                    on_event(RunEvent::FileWritten {
                        source: job.source().display().to_string(),
                        output: job.output().display().to_string(),
                    });
                    report.rendered.push(RenderedFile {
                        source: job.source().to_path_buf(),
                        output: job.output().to_path_buf(),
                    });
                }
                Err(error) => {
                    tracing::debug!(source = %job.source().display(), %error, "file failed");
                    on_event(RunEvent::FileFailed {
                        source: job.source().display().to_string(),
                        message: error.to_string(),
                    });
                    report.failures.push(RenderFailure {
                        source: job.source().to_path_buf(),
                        error,
                    });
                }
            }
        }

        self.finish(mode, report, on_event)
    }

    fn finish(
        &self,
        mode: Mode,
        report: RenderReport,
        on_event: &impl Fn(RunEvent),
    ) -> RenderReport {
        tracing::info!(
            mode = %mode,
            written = report.rendered.len(),
            errors = report.failures.len(),
            "render pass finished"
        );
        on_event(RunEvent::RenderComplete {
            written: report.rendered.len(),
            errors: report.failures.len(),
        });
        report
    }

    fn bundle_path(&self) -> Option<&Path> {
        match self.settings.mode() {
            Mode::Precompile => self.settings.output_file(),
            Mode::Render => None,
        }
    }

    fn render_one(&self, job: &RenderJob) -> NjkResult<()> {
        let output = self
            .engine
            .render(&job.template_name(), self.settings.render_context())
            .map_err(|e| NjkError::Render {
                path: job.source().to_path_buf(),
                message: e.message,
            })?;
        self.fs
            .write(job.output(), output.as_bytes())
            .map_err(|e| NjkError::Render {
                path: job.source().to_path_buf(),
                message: e.to_string(),
            })
    }

    fn precompile_one(&self, job: &RenderJob, append: bool) -> NjkResult<()> {
        let name = job.template_name();
        let options = PrecompileOptions {
            name: name.clone(),
            force: self.settings.force(),
        };
        let unit = self
            .engine
            .precompile(&name, &options)
            .map_err(|e| NjkError::Compile {
                path: job.source().to_path_buf(),
                message: e.message,
            })?;

        let write_error = |e: FsError| NjkError::Compile {
            path: job.source().to_path_buf(),
            message: e.to_string(),
        };

        if !append {
            return self
                .fs
                .write(job.output(), unit.as_bytes())
                .map_err(write_error);
        }

        let mut content = match self.fs.read(job.output()) {
            Ok(prior) => prior,
            Err(FsError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(write_error(e)),
        };
        content.extend_from_slice(unit.as_bytes());
        self.fs.write(job.output(), &content).map_err(write_error)
    }
}
