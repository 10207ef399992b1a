use crate::{Pid, Process, ProcessState, Program, Register, Registers, Script};

/// The process control block.
///
/// A record is never cloned: it is moved between the ready queue, the
/// processor, the blocked set and the terminated list, and lives in exactly
/// one of them at a time.
#[derive(Debug)]
pub struct ProcessRecord {
    pid: Pid,
    name: String,
    state: ProcessState,
    program_counter: usize,
    registers: Registers,
    program: Program,
    switches: usize,
}

impl ProcessRecord {
    pub fn new(pid: Pid, script: Script) -> Self {
        ProcessRecord {
            pid,
            program: Program::decode(&script.lines),
            name: script.name,
            state: ProcessState::Ready,
            program_counter: 0,
            registers: Registers::default(),
            switches: 0,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The program counter reached the end of the instructions.
    pub fn finished(&self) -> bool {
        self.program_counter >= self.program.len()
    }

    pub(crate) fn set_register(&mut self, register: Register, value: i32) {
        self.registers.set(register, value);
    }

    pub(crate) fn advance(&mut self) {
        self.program_counter = (self.program_counter + 1).min(self.program.len());
    }

    pub(crate) fn jump_to_end(&mut self) {
        self.program_counter = self.program.len();
    }

    pub(crate) fn dispatch(&mut self) {
        self.state = ProcessState::Running;
    }

    pub(crate) fn block(&mut self, wait: usize) {
        self.switches += 1;
        self.state = ProcessState::Blocked { wait };
    }

    pub(crate) fn preempt(&mut self) {
        self.switches += 1;
        self.state = ProcessState::Ready;
    }

    pub(crate) fn terminate(&mut self) {
        self.switches += 1;
        self.state = ProcessState::Terminated;
    }

    /// One aging step while blocked. Returns `true` when the wait is over
    /// and the process became ready.
    pub(crate) fn tick(&mut self) -> bool {
        match self.state {
            ProcessState::Blocked { wait } if wait > 1 => {
                self.state = ProcessState::Blocked { wait: wait - 1 };
                false
            }
            ProcessState::Blocked { .. } => {
                self.state = ProcessState::Ready;
                true
            }
            _ => false,
        }
    }
}

impl Process for ProcessRecord {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> ProcessState {
        self.state
    }

    fn program_counter(&self) -> usize {
        self.program_counter
    }

    fn registers(&self) -> Registers {
        self.registers
    }

    fn switches(&self) -> usize {
        self.switches
    }
}
