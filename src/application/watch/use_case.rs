//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::render::{RenderReport, RenderUseCase};
use crate::application::RunEvent;
use crate::domain::entities::TemplateSet;
use crate::domain::ports::{FileSystem, TemplateEngine};
use crate::domain::services::plan_batch;
use crate::domain::value_objects::ContentHash;
use crate::error::{NjkError, NjkResult};
use crate::infrastructure::glob::{glob, GlobOptions, TemplateMatcher};

use super::event::{FsEvent, StopHandle, WatchState, WatcherState};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch controller
///
/// Owns the render use case for the rest of the session. Notifications
/// arrive on the `notify` thread and are forwarded over a channel; every
/// [`TemplateSet`] mutation and every render happens on the thread that
/// calls [`run`](Self::run).
pub struct WatchController<E, F>
where
    E: TemplateEngine,
    F: FileSystem,
{
    render: RenderUseCase<E, F>,
    set: TemplateSet,
    matcher: TemplateMatcher,
    root: PathBuf,
    content_hashes: HashMap<PathBuf, ContentHash>,
    pending: WatcherState,
    state: WatchState,
    stop: StopHandle,
    watcher: Option<RecommendedWatcher>,
    events: Option<Receiver<Event>>,
}

impl<E, F> WatchController<E, F>
where
    E: TemplateEngine,
    F: FileSystem,
{
    /// Create an idle controller.
    ///
    /// Layouts are not excluded from the watch matcher: they have to be
    /// seen to drive full re-renders.
    pub fn new(render: RenderUseCase<E, F>) -> NjkResult<Self> {
        let settings = render.settings();
        let input_dir = settings.input_dir().to_path_buf();
        let matcher = TemplateMatcher::new(&input_dir, settings.glob_pattern(), &[])?;
        let root = input_dir.canonicalize().unwrap_or(input_dir);

        Ok(Self {
            render,
            set: TemplateSet::new(),
            matcher,
            root,
            content_hashes: HashMap::new(),
            pending: WatcherState::new(),
            state: WatchState::Idle,
            stop: StopHandle::new(),
            watcher: None,
            events: None,
        })
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn template_set(&self) -> &TemplateSet {
        &self.set
    }

    pub fn render_use_case(&self) -> &RenderUseCase<E, F> {
        &self.render
    }

    /// Handle that stops [`run`](Self::run) from another thread
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Ingest every file already matching the pattern, layouts included.
    ///
    /// Returns the number of files seen.
    pub fn seed(&mut self) -> NjkResult<usize> {
        let settings = self.render.settings();
        let existing = glob(
            settings.glob_pattern(),
            &GlobOptions::new(settings.input_dir()),
        )?;
        let marker = settings.layout_prefix().to_string();

        for path in &existing {
            self.set.ingest(path.clone(), &marker);
            if let Ok(content) = self.render.fs().read(&self.root.join(path)) {
                self.content_hashes
                    .insert(path.clone(), ContentHash::from_bytes(&content));
            }
        }

        tracing::debug!(
            templates = self.set.templates().len(),
            layouts = self.set.layouts().len(),
            "seeded template set"
        );
        Ok(existing.len())
    }

    /// Seed the template set and subscribe to changes under the input directory
    pub fn start(&mut self, on_event: &impl Fn(RunEvent)) -> NjkResult<()> {
        if self.state != WatchState::Idle {
            return Ok(());
        }

        self.seed()?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    let _ = tx.send(event);
                }
                Err(e) => tracing::warn!(error = %e, "watch notification failed"),
            },
            Config::default(),
        )?;
        watcher.watch(&self.root, RecursiveMode::Recursive)?;

        self.watcher = Some(watcher);
        self.events = Some(rx);
        self.state = WatchState::Watching;

        tracing::info!(root = %self.root.display(), "watching for changes");
        on_event(RunEvent::WatchStarted {
            root: self.root.display().to_string(),
            pattern: self.render.settings().glob_pattern().to_string(),
            templates: self.set.templates().len(),
            layouts: self.set.layouts().len(),
        });
        Ok(())
    }

    /// Process notifications until stopped (blocking)
    pub fn run(&mut self, on_event: &impl Fn(RunEvent)) -> NjkResult<()> {
        if self.state != WatchState::Watching {
            return Err(NjkError::Watch("watcher is not started".to_string()));
        }

        while !self.stop.is_stopped() {
            let received = match &self.events {
                Some(rx) => rx.recv_timeout(POLL_INTERVAL),
                None => break,
            };

            match received {
                Ok(event) => {
                    for path in event.paths {
                        if let Some(fs_event) = FsEvent::from_notify(&event.kind, path) {
                            self.handle(fs_event, on_event);
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    on_event(RunEvent::Error {
                        message: "file watcher disconnected".to_string(),
                    });
                    break;
                }
            }

            if self.pending.should_sync() {
                self.flush(on_event);
            }
        }

        self.stop();
        on_event(RunEvent::Shutdown);
        Ok(())
    }

    /// Apply one file system notification.
    ///
    /// Paths outside the input directory, paths not matching the pattern
    /// and writes that leave the content unchanged are ignored. An `Add`
    /// for a path already in the set counts as a change.
    pub fn handle(&mut self, event: FsEvent, on_event: &impl Fn(RunEvent)) {
        let Some(relative) = self.relativize(event.path()) else {
            return;
        };
        if !self.matcher.is_match(&relative) {
            return;
        }

        let Ok(content) = self.render.fs().read(&self.root.join(&relative)) else {
            tracing::debug!(path = %relative.display(), "ignoring unreadable path");
            return;
        };
        let hash = ContentHash::from_bytes(&content);
        if self.content_hashes.get(&relative) == Some(&hash) {
            tracing::debug!(path = %relative.display(), "content unchanged");
            return;
        }
        self.content_hashes.insert(relative.clone(), hash);

        let is_new = matches!(event, FsEvent::Add(_)) && !self.set.contains(&relative);
        if is_new {
            let marker = self.render.settings().layout_prefix().to_string();
            let role = self.set.ingest(relative.clone(), &marker);
            tracing::debug!(path = %relative.display(), %role, "file added");
            on_event(RunEvent::FileAdded {
                path: relative.display().to_string(),
                role,
            });
            return;
        }

        let Some(role) = self.set.role_of(&relative) else {
            tracing::debug!(path = %relative.display(), "change on unknown path");
            return;
        };
        on_event(RunEvent::FileChanged {
            path: relative.display().to_string(),
            role,
        });
        self.pending.add_change(relative);
    }

    /// Render everything the pending changes call for, now
    pub fn flush(&mut self, on_event: &impl Fn(RunEvent)) -> RenderReport {
        let changes = self.pending.take_changes();
        let mut report = RenderReport::new();
        for pass in plan_batch(&changes, &self.set) {
            report.merge(self.render.render_all(&pass, on_event));
        }
        report
    }

    /// Whether changes are waiting for the debounce window to close
    pub fn has_pending(&self) -> bool {
        self.pending.has_pending()
    }

    /// Release the watcher. Safe to call more than once.
    pub fn stop(&mut self) {
        self.stop.stop();
        if self.state == WatchState::Stopped {
            return;
        }
        self.watcher = None;
        self.events = None;
        self.state = WatchState::Stopped;
        tracing::info!("stopped watching");
    }

    fn relativize(&self, path: &Path) -> Option<PathBuf> {
        if path.is_relative() {
            return Some(path.to_path_buf());
        }
        let input_dir = self.render.settings().input_dir();
        path.strip_prefix(&self.root)
            .or_else(|_| path.strip_prefix(input_dir))
            .ok()
            .map(Path::to_path_buf)
    }
}
