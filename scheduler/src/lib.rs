//! A round robin scheduling simulator.
//!
//! This library holds the scheduling engine: the process control blocks,
//! the instruction interpreter, the ready and blocked queues and the round
//! robin dispatcher with its statistics. Reading scripts and writing the
//! run log are left to the callers, which talk to the engine through
//! [`Script`], [`Observer`] and [`Summary`].
//!

use std::num::NonZeroUsize;

mod error;
mod instruction;
pub mod interpreter;
mod process;
mod queues;
mod scheduler;
mod statistics;

pub use crate::error::{InstructionError, SchedulerError};
pub use crate::instruction::{Instruction, Program, Register, Registers};
pub use crate::process::ProcessRecord;
pub use crate::queues::QueueManager;
pub use crate::scheduler::{
    Event, Exit, Observer, Pid, Process, ProcessState, Scheduler, SchedulingDecision, Script,
};
pub use crate::statistics::{Statistics, Summary};
pub use schedulers::RoundRobin;

mod schedulers;

/// Returns a round robin scheduler.
///
/// * `quantum` - the number of instructions a process can execute before
///               it is preempted. A process that starts an I/O operation
///               stays blocked for twice this many dispatch cycles.
pub fn round_robin(quantum: NonZeroUsize) -> RoundRobin {
    RoundRobin::new(quantum)
}
