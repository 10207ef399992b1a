use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors that stop the simulator before any process is scheduled.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),

    #[error("cannot read the quantum from {}: {source}", path.display())]
    QuantumUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the quantum in {} is not an integer: `{contents}`", path.display())]
    QuantumMalformed {
        path: PathBuf,
        contents: String,
        #[source]
        source: ParseIntError,
    },

    #[error("the quantum in {} must be positive, found {value}", path.display())]
    QuantumNotPositive { path: PathBuf, value: i64 },

    #[error("cannot list the programs in {}: {source}", path.display())]
    ProgramsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .txt program found in {}", path.display())]
    NoPrograms { path: PathBuf },
}
