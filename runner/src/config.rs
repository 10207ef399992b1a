//! Command line and environment configuration.
//!
//! # Grammar
//!
//! ```text
//! runner [--quantum=<file>] [--programs=<dir>] [--logs=<dir>]
//! runner --help | -h
//! ```
//!
//! A flag that is not given falls back to its environment variable
//! (`QUANTUM_FILE`, `PROGRAMS_DIR`, `LOGS_DIR`) and then to the default
//! layout under `resources/`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_QUANTUM_FILE: &str = "resources/quantum/quantum.txt";
const DEFAULT_PROGRAMS_DIR: &str = "resources/inserts";
const DEFAULT_LOGS_DIR: &str = "resources/logs";

/// Where the simulator reads its inputs and writes its journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quantum_file: PathBuf,
    pub programs_dir: PathBuf,
    pub logs_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Parses the process arguments and environment.
pub fn from_env() -> Result<Command, ConfigError> {
    parse(env::args_os().skip(1), |key| env::var_os(key))
}

/// Parses `args` (without the program name), looking up missing values
/// with `var`.
pub fn parse<I, V>(args: I, var: V) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = OsString>,
    V: Fn(&str) -> Option<OsString>,
{
    let mut quantum_file = None;
    let mut programs_dir = None;
    let mut logs_dir = None;

    for arg in args {
        let arg = arg.to_string_lossy();
        if arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        }
        if let Some(rest) = arg.strip_prefix("--quantum=") {
            quantum_file = Some(PathBuf::from(rest));
            continue;
        }
        if let Some(rest) = arg.strip_prefix("--programs=") {
            programs_dir = Some(PathBuf::from(rest));
            continue;
        }
        if let Some(rest) = arg.strip_prefix("--logs=") {
            logs_dir = Some(PathBuf::from(rest));
            continue;
        }
        return Err(ConfigError::UnknownArgument(arg.into_owned()));
    }

    let resolve = |flag: Option<PathBuf>, key: &str, default: &str| {
        flag.or_else(|| var(key).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(default))
    };

    Ok(Command::Run(Config {
        quantum_file: resolve(quantum_file, "QUANTUM_FILE", DEFAULT_QUANTUM_FILE),
        programs_dir: resolve(programs_dir, "PROGRAMS_DIR", DEFAULT_PROGRAMS_DIR),
        logs_dir: resolve(logs_dir, "LOGS_DIR", DEFAULT_LOGS_DIR),
    }))
}

pub fn print_usage() {
    eprintln!("usage: runner [--quantum=<file>] [--programs=<dir>] [--logs=<dir>]");
    eprintln!();
    eprintln!("  --quantum=<file>   file holding the quantum");
    eprintln!("                     [env QUANTUM_FILE, default {DEFAULT_QUANTUM_FILE}]");
    eprintln!("  --programs=<dir>   directory of .txt programs");
    eprintln!("                     [env PROGRAMS_DIR, default {DEFAULT_PROGRAMS_DIR}]");
    eprintln!("  --logs=<dir>       directory for the run log");
    eprintln!("                     [env LOGS_DIR, default {DEFAULT_LOGS_DIR}]");
}
