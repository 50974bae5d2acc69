//! Program identity and log file naming.
//!
//! Every log file this crate manages is named `{program}_{YYYYMMDD}.log`.
//! The 8-digit date stamp keeps lexical order identical to chronological
//! order, so retention can compare stamps as plain strings.

use std::env;

use once_cell::sync::OnceCell;
use time::Date;
use time::macros::format_description;

use crate::{Error, Result};

/// File extension shared by every log file this crate manages.
pub const LOG_SUFFIX: &str = ".log";

/// A resolved program identity and whether it logs to rotated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Program name used as the log-file prefix.
    pub name: String,
    /// True when the name is on the configured program list.
    pub file_backed: bool,
}

/// Shared identity slot, filled at most once.
///
/// The slot is either seeded up front (explicit program override) or filled
/// lazily by the first rotation cycle. A failed derivation leaves it empty so
/// a later cycle can retry.
#[derive(Debug)]
pub struct IdentityCell {
    allow: Vec<String>,
    slot: OnceCell<Identity>,
}

impl IdentityCell {
    /// Create an empty cell with the given program list.
    pub fn new(allow: Vec<String>) -> Self {
        Self {
            allow,
            slot: OnceCell::new(),
        }
    }

    /// Create a cell pre-seeded with an explicit program name.
    pub fn preset(name: impl Into<String>, allow: Vec<String>) -> Self {
        let identity = classify(name.into(), &allow);
        Self {
            allow,
            slot: OnceCell::with_value(identity),
        }
    }

    /// The resolved identity, if any.
    pub fn get(&self) -> Option<&Identity> {
        self.slot.get()
    }

    /// The resolved identity, deriving it from the process on first use.
    pub fn resolve(&self) -> Result<&Identity> {
        self.slot
            .get_or_try_init(|| Ok(classify(detect_program_name()?, &self.allow)))
    }
}

/// Only an exact name match selects file logging. A substring check would let
/// `quickpay-debug` write into `quickpay` files.
fn classify(name: String, allow: &[String]) -> Identity {
    let file_backed = allow.iter().any(|p| p == &name);
    Identity { name, file_backed }
}

/// Derive the program name from the executable base name, falling back to
/// the last segment of the working directory.
pub fn detect_program_name() -> Result<String> {
    if let Ok(exe) = env::current_exe()
        && let Some(stem) = exe.file_stem().and_then(|s| s.to_str())
        && !stem.is_empty()
    {
        return Ok(stem.to_string());
    }
    let cwd = env::current_dir()
        .map_err(|e| Error::Identity(format!("working directory unavailable: {e}")))?;
    cwd.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Identity("working directory has no usable name".to_string()))
}

/// Compose the dated file name for a program, e.g. `quickpay_20260102.log`.
pub fn dated_file_name(name: &str, stamp: &str) -> String {
    format!("{name}_{stamp}{LOG_SUFFIX}")
}

/// Extract the 8-digit date stamp from a file name in this program's family.
///
/// Returns `None` for names outside the `{name}_{YYYYMMDD}.log` shape, so
/// unrelated files in the same directory are never touched.
pub fn embedded_date<'a>(file_name: &'a str, name: &str) -> Option<&'a str> {
    let rest = file_name.strip_prefix(name)?.strip_prefix('_')?;
    let stamp = rest.strip_suffix(LOG_SUFFIX)?;
    (stamp.len() == 8 && stamp.bytes().all(|b| b.is_ascii_digit())).then_some(stamp)
}

/// Format a date as the sortable 8-digit stamp embedded in file names.
pub fn date_stamp(date: Date) -> Result<String> {
    let format = format_description!("[year][month][day]");
    date.format(&format).map_err(|e| Error::Time(e.into()))
}
