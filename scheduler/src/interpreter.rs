//! Executes instructions against a process record.
//!
//! The interpreter only touches the registers and the program counter. It
//! reports whether the process may keep running, the dispatcher decides
//! where the process goes next.

use crate::{Instruction, Process, ProcessRecord, SchedulerError};

/// Executes `instruction` on `process`.
///
/// Returns `false` when the instruction is an I/O request and the process
/// has to leave the processor.
pub fn execute(process: &mut ProcessRecord, instruction: Instruction) -> bool {
    match instruction {
        Instruction::Set { register, value } => {
            process.set_register(register, value);
            process.advance();
            true
        }
        Instruction::Compute => {
            process.advance();
            true
        }
        Instruction::BlockIo => {
            // resume past the request
            process.advance();
            false
        }
        Instruction::Exit => {
            process.jump_to_end();
            true
        }
    }
}

/// Fetches the instruction at the program counter and executes it.
///
/// A line that could not be decoded is fatal for the run.
pub fn step(process: &mut ProcessRecord) -> Result<bool, SchedulerError> {
    let program_counter = process.program_counter();
    let instruction = match process.program().fetch(program_counter) {
        Some(Ok(instruction)) => instruction,
        Some(Err(source)) => {
            return Err(SchedulerError::Instruction {
                pid: process.pid(),
                name: process.name().to_string(),
                program_counter,
                source: source.clone(),
            })
        }
        // past the end there is nothing left to run
        None => return Ok(true),
    };

    log::trace!(
        "{} ({}) {}: {}",
        process.pid(),
        process.name(),
        program_counter,
        instruction
    );
    Ok(execute(process, instruction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InstructionError, Pid, Register, Script};
    use pretty_assertions::assert_eq;

    fn record(lines: &[&str]) -> ProcessRecord {
        ProcessRecord::new(Pid::FIRST, Script::new("P1", lines.iter().copied()))
    }

    #[test]
    fn set_loads_the_register() {
        let mut process = record(&["A=5", "D=-2"]);

        assert!(step(&mut process).unwrap());
        assert!(step(&mut process).unwrap());

        let registers = process.registers();
        assert_eq!(registers.get(Register::A), 5);
        assert_eq!(registers.get(Register::D), -2);
        assert_eq!(process.program_counter(), 2);
    }

    #[test]
    fn compute_only_advances() {
        let mut process = record(&["COM", "COM"]);

        assert!(step(&mut process).unwrap());
        assert_eq!(process.program_counter(), 1);
        assert_eq!(process.registers().to_string(), "A=0 B=0 C=0 D=0");
    }

    #[test]
    fn io_request_suspends_past_itself() {
        let mut process = record(&["E/S", "COM"]);

        assert!(!step(&mut process).unwrap());
        assert_eq!(process.program_counter(), 1);
    }

    #[test]
    fn exit_jumps_to_the_end() {
        let mut process = record(&["SAIDA", "A=1", "COM"]);

        assert!(step(&mut process).unwrap());
        assert_eq!(process.program_counter(), 3);
        assert!(process.finished());
        assert_eq!(process.registers().get(Register::A), 0);
    }

    #[test]
    fn unknown_instruction_is_fatal() {
        let mut process = record(&["COM", "XYZ"]);

        assert!(step(&mut process).unwrap());
        let error = step(&mut process).unwrap_err();

        assert_eq!(
            error,
            SchedulerError::Instruction {
                pid: Pid::FIRST,
                name: "P1".to_string(),
                program_counter: 1,
                source: InstructionError::Unknown("XYZ".to_string()),
            }
        );
        assert_eq!(process.program_counter(), 1);
    }
}
