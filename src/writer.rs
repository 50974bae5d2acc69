use std::io::{self, Write};

use crate::rotation::ActiveSlot;

/// A writer over the active log destination.
///
/// Writes go to the rotated file when one is installed and to stdout
/// otherwise, so console-only processes and the window before the first
/// rotation still produce output. The slot is shared with the rotator;
/// a swap is picked up by the very next write.
pub struct ActiveWriter {
    active: ActiveSlot,
}

impl ActiveWriter {
    pub(crate) fn new(active: ActiveSlot) -> Self {
        Self { active }
    }
}

impl Write for ActiveWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.active.lock().unwrap();
        match guard.as_mut() {
            Some(active) => active.file.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let guard = self.active.lock().unwrap();
        match guard.as_ref() {
            // File::flush takes &mut self, but sync_all works on &File
            Some(active) => active.file.sync_all(),
            None => io::stdout().flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::ActiveFile;
    use std::fs::{self, OpenOptions};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_empty_slot_falls_back_to_stdout() {
        let mut writer = ActiveWriter::new(Arc::new(Mutex::new(None)));
        let n = writer.write(b"console line\n").unwrap();
        assert_eq!(n, 13);
        writer.flush().unwrap();
    }

    #[test]
    fn test_filled_slot_writes_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("quickpay_20260102.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let slot: ActiveSlot = Arc::new(Mutex::new(Some(ActiveFile {
            file,
            path: path.clone(),
            stamp: "20260102".to_string(),
        })));

        let mut writer = ActiveWriter::new(slot);
        writer.write_all(b"file line\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "file line\n");
    }

    #[test]
    fn test_slot_swap_redirects_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("quickpay_20260102.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let slot: ActiveSlot = Arc::new(Mutex::new(None));

        let mut writer = ActiveWriter::new(Arc::clone(&slot));
        writer.write_all(b"to console\n").unwrap();

        slot.lock().unwrap().replace(ActiveFile {
            file,
            path: path.clone(),
            stamp: "20260102".to_string(),
        });
        writer.write_all(b"to file\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "to file\n");
    }
}
