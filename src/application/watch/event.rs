//! Watch event types and debounce state

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::event::ModifyKind;
use notify::EventKind;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// File system notification, reduced to what the controller acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEvent {
    /// A file appeared (created, or renamed into place)
    Add(PathBuf),
    /// A file's content was modified
    Change(PathBuf),
}

impl FsEvent {
    /// Translate a `notify` event kind for `path`
    pub fn from_notify(kind: &EventKind, path: PathBuf) -> Option<Self> {
        match kind {
            EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(_)) => {
                Some(FsEvent::Add(path))
            }
            EventKind::Modify(_) => Some(FsEvent::Change(path)),
            _ => None,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsEvent::Add(path) | FsEvent::Change(path) => path,
        }
    }
}

/// Lifecycle of a [`WatchController`](super::WatchController)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Watching,
    Stopped,
}

/// Cross-thread stop signal for the watch loop
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Watcher state for debouncing
///
/// Changes are kept in arrival order without duplicates so that passes
/// run in the order the user saved files.
#[derive(Debug, Default)]
pub(crate) struct WatcherState {
    pub(crate) pending_changes: Vec<PathBuf>,
    pub(crate) last_change: Option<Instant>,
}

impl WatcherState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_change(&mut self, path: PathBuf) {
        if !self.pending_changes.contains(&path) {
            self.pending_changes.push(path);
        }
        self.last_change = Some(Instant::now());
    }

    pub(crate) fn should_sync(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending_changes.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
        } else {
            false
        }
    }

    pub(crate) fn take_changes(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        std::mem::take(&mut self.pending_changes)
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
