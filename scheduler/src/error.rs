use std::num::ParseIntError;

use crate::Pid;

/// Why a script line is not an instruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstructionError {
    #[error("unknown instruction `{0}`")]
    Unknown(String),

    #[error("unknown instruction `{line}`: {source}")]
    InvalidLiteral {
        line: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that abort a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("process {pid} ({name}) failed at instruction {program_counter}: {source}")]
    Instruction {
        pid: Pid,
        name: String,
        program_counter: usize,
        #[source]
        source: InstructionError,
    },
}
