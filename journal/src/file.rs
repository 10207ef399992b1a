use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::Entry;

/// A journal persisted on disk.
///
/// Every run gets its own file, `log<QQ>_<millis>.txt`, named after the
/// quantum and the time the file was created so that runs never overwrite
/// each other.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogFile {
    /// Creates the log file inside `dir`, creating the directory if needed.
    pub fn create(dir: &Path, quantum: NonZeroUsize) -> io::Result<LogFile> {
        fs::create_dir_all(dir)?;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let path = dir.join(file_name(quantum, millis));
        let writer = BufWriter::new(File::create(&path)?);
        log::debug!("journal file {}", path.display());
        Ok(LogFile { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the entries, one per line, and flushes them.
    pub fn write_entries(&mut self, entries: &[Entry]) -> io::Result<()> {
        for entry in entries {
            writeln!(self.writer, "{entry}")?;
        }
        self.writer.flush()
    }
}

fn file_name(quantum: NonZeroUsize, millis: u128) -> String {
    format!("log{:02}_{}.txt", quantum, millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_after_quantum_and_time() {
        let quantum = NonZeroUsize::new(3).unwrap();
        assert_eq!(file_name(quantum, 1700000000123), "log03_1700000000123.txt");

        let quantum = NonZeroUsize::new(120).unwrap();
        assert_eq!(file_name(quantum, 5), "log120_5.txt");
    }

    #[test]
    fn writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        let mut file = LogFile::create(&logs, NonZeroUsize::new(2).unwrap()).unwrap();
        file.write_entries(&[
            Entry::Loaded("P1".to_string()),
            Entry::Running("P1".to_string()),
            Entry::Error("boom".to_string()),
        ])
        .unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("log02_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "Carregando P1\nExecutando P1\n[ERRO] boom\n"
        );
    }
}
