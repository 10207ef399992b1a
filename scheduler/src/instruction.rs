//! Instructions of the process scripts.
//!
//! A script line is one of:
//!
//! ```text
//! A=<int>   B=<int>   C=<int>   D=<int>   load a literal into a register
//! COM                                     compute, no visible effect
//! E/S                                     start an I/O operation
//! SAIDA                                   exit the process
//! ```
//!
//! Lines are decoded once, when the process is admitted. A line that does
//! not decode is kept as an error and only reported when the process
//! reaches it, so everything the process did before still happens.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::InstructionError;

/// One of the four general purpose registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
}

impl Register {
    pub const ALL: [Register; 4] = [Register::A, Register::B, Register::C, Register::D];

    fn from_prefix(prefix: &str) -> Option<Register> {
        match prefix {
            "A" => Some(Register::A),
            "B" => Some(Register::B),
            "C" => Some(Register::C),
            "D" => Some(Register::D),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Register::A => 0,
            Register::B => 1,
            Register::C => 2,
            Register::D => 3,
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
        };
        f.write_str(name)
    }
}

/// The register file of a process. Every register starts at 0.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Registers([i32; 4]);

impl Registers {
    pub fn get(&self, register: Register) -> i32 {
        self.0[register.index()]
    }

    pub(crate) fn set(&mut self, register: Register, value: i32) {
        self.0[register.index()] = value;
    }
}

impl Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for register in Register::ALL {
            write!(f, "{separator}{register}={}", self.get(register))?;
            separator = " ";
        }
        Ok(())
    }
}

/// A decoded instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `R=<int>`
    Set { register: Register, value: i32 },
    /// `COM`
    Compute,
    /// `E/S`
    BlockIo,
    /// `SAIDA`
    Exit,
}

impl FromStr for Instruction {
    type Err = InstructionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line {
            "COM" => return Ok(Instruction::Compute),
            "E/S" => return Ok(Instruction::BlockIo),
            "SAIDA" => return Ok(Instruction::Exit),
            _ => {}
        }

        let Some((prefix, literal)) = line.split_once('=') else {
            return Err(InstructionError::Unknown(line.to_string()));
        };
        let Some(register) = Register::from_prefix(prefix) else {
            return Err(InstructionError::Unknown(line.to_string()));
        };
        let value = literal
            .parse::<i32>()
            .map_err(|source| InstructionError::InvalidLiteral {
                line: line.to_string(),
                source,
            })?;

        Ok(Instruction::Set { register, value })
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Set { register, value } => write!(f, "{register}={value}"),
            Instruction::Compute => f.write_str("COM"),
            Instruction::BlockIo => f.write_str("E/S"),
            Instruction::Exit => f.write_str("SAIDA"),
        }
    }
}

/// The decoded instruction sequence of a process. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Result<Instruction, InstructionError>>,
}

impl Program {
    pub fn decode<I, S>(lines: I) -> Program
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Program {
            instructions: lines
                .into_iter()
                .map(|line| line.as_ref().parse())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the instruction at `index`, or the reason it could not be
    /// decoded. [`None`] past the end.
    pub fn fetch(&self, index: usize) -> Option<Result<Instruction, &InstructionError>> {
        self.instructions
            .get(index)
            .map(|decoded| decoded.as_ref().copied())
    }
}
