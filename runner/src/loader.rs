//! Reads the quantum and the process scripts from disk.
//!
//! A program file holds the process name on its first line and one
//! instruction per following line:
//!
//! ```text
//! P1
//! A=5
//! COM
//! E/S
//! SAIDA
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use scheduler::Script;

use crate::error::ConfigError;

/// Reads the quantum, a single positive integer, from `path`.
pub fn load_quantum(path: &Path) -> Result<NonZeroUsize, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::QuantumUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = contents.trim();

    let value = contents
        .parse::<i64>()
        .map_err(|source| ConfigError::QuantumMalformed {
            path: path.to_path_buf(),
            contents: contents.to_string(),
            source,
        })?;

    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| ConfigError::QuantumNotPositive {
            path: path.to_path_buf(),
            value,
        })
}

/// Lists the `.txt` files of `dir`, sorted by name ignoring case.
pub fn discover_programs(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let unreadable = |source| ConfigError::ProgramsUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut programs = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && is_program(&path) {
            programs.push(path);
        }
    }

    if programs.is_empty() {
        return Err(ConfigError::NoPrograms {
            path: dir.to_path_buf(),
        });
    }

    programs.sort_by_cached_key(|path| sort_key(path));
    Ok(programs)
}

fn is_program(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Loads every program, in order. Files that cannot be read or have no
/// name line are skipped.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a script
/// saved in another encoding still loads.
pub fn load_programs(paths: &[PathBuf]) -> Vec<Script> {
    let mut scripts = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                continue;
            }
        };
        match parse_program(&String::from_utf8_lossy(&bytes)) {
            Some(script) => {
                debug!("loaded {} from {}", script.name, path.display());
                scripts.push(script);
            }
            None => warn!("skipping {}: no process name", path.display()),
        }
    }
    scripts
}

/// Splits a program file into the process name and its instruction lines.
pub fn parse_program(text: &str) -> Option<Script> {
    let mut lines = text.lines();
    let name = lines.next()?;
    Some(Script::new(name, lines.map(str::trim)))
}
