use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{env, fs};

use time::Date;
use time::util::days_in_year_month;

use crate::naming::{self, IdentityCell};
use crate::schedule;
use crate::{Error, Result};

/// Deletes this program's dated log files once they age out.
///
/// A file ages out when its embedded stamp is at or before the cutoff,
/// `keep_months` calendar months before today. Stamps sort lexically, so
/// the comparison is a plain string compare.
pub struct Sweeper {
    dir: PathBuf,
    keep_months: u8,
    identity: Arc<IdentityCell>,
}

impl Sweeper {
    pub fn new(dir: impl Into<PathBuf>, keep_months: u8, identity: Arc<IdentityCell>) -> Self {
        Self {
            dir: dir.into(),
            keep_months,
            identity,
        }
    }

    /// Delete expired files and return how many went away.
    ///
    /// Directory resolution, cutoff computation, and the directory listing
    /// abort the sweep with an error; a single failed deletion is logged
    /// and the remaining entries are still attempted.
    pub fn sweep(&self) -> Result<usize> {
        let Some(identity) = self.identity.get() else {
            // Nothing can match before the identity is known.
            return Ok(0);
        };
        let dir = absolute_dir(&self.dir)?;
        // A zero threshold would put the live file at the cutoff and unlink
        // it mid-day; the floor is one month.
        let cutoff = cutoff_stamp(schedule::local_now().date(), self.keep_months.max(1))?;
        let entries = match snapshot(&dir) {
            Ok(entries) => entries,
            // A directory that was never created has nothing to sweep.
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        Ok(prune(&entries, &identity.name, &cutoff))
    }

    /// Timer entry point: run a sweep and report the outcome in-band.
    pub fn run(&self) {
        match self.sweep() {
            Ok(0) => {}
            Ok(deleted) => {
                tracing::debug!(deleted, dir = %self.dir.display(), "retention sweep finished");
            }
            Err(e) => {
                tracing::error!(error = %e, dir = %self.dir.display(), "retention sweep aborted");
            }
        }
    }
}

/// Resolve `dir` against the current working directory.
fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

/// One (file name, path) pair per regular file in `dir`, collected up front
/// so deletions never disturb the iteration.
fn snapshot(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            entries.push((name.to_string(), entry.path()));
        }
    }
    Ok(entries)
}

/// Delete every listed file of `name`'s family stamped at or before `cutoff`.
fn prune(entries: &[(String, PathBuf)], name: &str, cutoff: &str) -> usize {
    let mut deleted = 0;
    for (file_name, path) in entries {
        let Some(stamp) = naming::embedded_date(file_name, name) else {
            continue;
        };
        if stamp > cutoff {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                deleted += 1;
                tracing::debug!(path = %path.display(), "deleted expired log file");
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "failed to delete expired log file");
            }
        }
    }
    deleted
}

/// The newest stamp considered expired.
fn cutoff_stamp(today: Date, keep_months: u8) -> Result<String> {
    naming::date_stamp(months_earlier(today, keep_months)?)
}

/// Step back whole calendar months, clamping the day to the target month.
/// March 31 minus one month is February 28 (or 29), not an invalid date.
fn months_earlier(date: Date, months: u8) -> Result<Date> {
    let mut year = date.year();
    let mut month = date.month();
    for _ in 0..months {
        month = month.previous();
        if month == time::Month::December {
            year -= 1;
        }
    }
    let day = date.day().min(days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).map_err(|e| Error::Time(e.into()))
}
