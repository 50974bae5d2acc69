use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::naming::{self, IdentityCell};
use crate::schedule;
use crate::writer::ActiveWriter;

/// State behind the active destination: the open file, where it lives, and
/// the date stamp it was opened under.
#[derive(Debug)]
pub(crate) struct ActiveFile {
    pub(crate) file: File,
    pub(crate) path: PathBuf,
    pub(crate) stamp: String,
}

/// Shared slot for the active destination; `None` means console.
pub(crate) type ActiveSlot = Arc<Mutex<Option<ActiveFile>>>;

/// Owns the active log file and replaces it once per calendar day.
///
/// `rotate` runs at startup and at every local midnight. Log calls never
/// wait on it: they keep writing to whatever the slot holds, and the swap
/// is a single `Mutex`-guarded replace.
pub struct Rotator {
    dir: PathBuf,
    identity: Arc<IdentityCell>,
    active: ActiveSlot,
}

impl Rotator {
    pub fn new(dir: impl Into<PathBuf>, identity: Arc<IdentityCell>) -> Self {
        Self {
            dir: dir.into(),
            identity,
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// A writer over the active destination, for the subscriber layer.
    pub fn writer(&self) -> ActiveWriter {
        ActiveWriter::new(Arc::clone(&self.active))
    }

    /// Path of the currently active file, if any.
    pub fn active_path(&self) -> Option<PathBuf> {
        self.active.lock().unwrap().as_ref().map(|a| a.path.clone())
    }

    /// Open today's log file and make it the active destination.
    ///
    /// The very first call may only resolve the program identity; file
    /// logging then starts on the next cycle. Any failure keeps the
    /// previous destination in place, so a bad day never loses output.
    pub fn rotate(&self) {
        let identity = match self.identity.get() {
            Some(identity) => identity,
            None => {
                if let Err(e) = self.identity.resolve() {
                    self.report("cannot resolve program identity", None, &e);
                }
                return;
            }
        };
        if !identity.file_backed {
            return;
        }
        match naming::date_stamp(schedule::local_now().date()) {
            Ok(stamp) => self.rotate_to(&identity.name, stamp),
            Err(e) => self.report("cannot compute date stamp", None, &e),
        }
    }

    fn rotate_to(&self, name: &str, stamp: String) {
        if self
            .active
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|a| a.stamp == stamp)
        {
            return;
        }
        let path = self.dir.join(naming::dated_file_name(name, &stamp));
        let file = match self.open_dated(&path) {
            Ok(file) => file,
            Err(e) => {
                self.report("cannot open log file", Some(&path), &e);
                return;
            }
        };
        let previous = self.active.lock().unwrap().replace(ActiveFile {
            file,
            path: path.clone(),
            stamp,
        });
        tracing::info!(path = %path.display(), "log file rotated");
        if let Some(old) = previous
            && let Err(e) = old.file.sync_all()
        {
            tracing::warn!(error = %e, path = %old.path.display(), "failed to flush previous log file");
        }
    }

    fn open_dated(&self, path: &Path) -> std::io::Result<File> {
        fs::create_dir_all(&self.dir)?;
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Report a rotation failure in-band once a file is active, on the
    /// console before that (the subscriber may not even exist yet).
    fn report(&self, what: &str, path: Option<&Path>, err: &dyn fmt::Display) {
        let on_console = self.active.lock().unwrap().is_none();
        match (on_console, path) {
            (true, Some(p)) => eprintln!("{what} {}: {err}", p.display()),
            (true, None) => eprintln!("{what}: {err}"),
            (false, Some(p)) => tracing::error!(error = %err, path = %p.display(), "{what}"),
            (false, None) => tracing::error!(error = %err, "{what}"),
        }
    }
}
