use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::ops::Add;

use crate::{Registers, SchedulerError, Statistics, Summary};

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1 and follow the admission order.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    /// The PID of the first admitted process.
    pub const FIRST: Pid = Pid(NonZeroUsize::MIN);

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<usize> for Pid {
    type Output = Pid;

    fn add(self, rhs: usize) -> Self::Output {
        Pid(self.0.saturating_add(rhs))
    }
}

/// A process script as handed over by a loader: the process name and its
/// instruction lines, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// The name of the process.
    pub name: String,

    /// The raw instruction lines. Surrounding whitespace is ignored.
    pub lines: Vec<String>,
}

impl Script {
    pub fn new<N, I, S>(name: N, lines: I) -> Script
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Script {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// How a dispatch slice ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The process requested I/O and was moved to the blocked set.
    Blocked,

    /// The process used its whole quantum and went back to the ready queue.
    Expired,

    /// The process reached the end of its instructions or executed `SAIDA`.
    Terminated,
}

impl Display for Exit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exit::Blocked => write!(f, "blocked"),
            Exit::Expired => write!(f, "expired"),
            Exit::Terminated => write!(f, "terminated"),
        }
    }
}

/// What happened during one dispatch cycle.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// The process with PID `pid` ran `executed` instructions and left the
    /// processor because of `exit`.
    Run {
        pid: Pid,
        executed: usize,
        exit: Exit,
    },

    /// No process was ready. The blocked processes were aged nonetheless.
    Idle,

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run {
                pid,
                executed,
                exit,
            } => {
                write!(f, "Run {} for {} instructions, {}", pid, executed, exit)
            }
            SchedulingDecision::Idle => {
                write!(f, "Idle, every process is blocked")
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// Something the scheduler reports to its [`Observer`] while it works.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// The process was admitted and placed in the ready queue.
    Admitted { pid: Pid, name: &'a str },

    /// The process left the ready queue and starts a dispatch slice.
    Dispatched { pid: Pid, name: &'a str },

    /// The process was taken off the processor after `executed` instructions,
    /// either because it requested I/O or because its quantum expired.
    Interrupted {
        pid: Pid,
        name: &'a str,
        executed: usize,
    },

    /// The process started a simulated I/O operation.
    IoStarted { pid: Pid, name: &'a str },

    /// The process finished, with its final register values.
    Terminated {
        pid: Pid,
        name: &'a str,
        registers: Registers,
    },
}

impl Display for Event<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Admitted { pid, name } => write!(f, "{pid} ({name}) admitted"),
            Event::Dispatched { pid, name } => write!(f, "{pid} ({name}) running"),
            Event::Interrupted {
                pid,
                name,
                executed,
            } => write!(f, "{pid} ({name}) interrupted after {executed}"),
            Event::IoStarted { pid, name } => write!(f, "{pid} ({name}) waiting for I/O"),
            Event::Terminated {
                pid,
                name,
                registers,
            } => write!(f, "{pid} ({name}) terminated with {registers}"),
        }
    }
}

/// Receives the [`Event`]s of a run, in the order they happen.
pub trait Observer {
    fn notify(&mut self, event: Event<'_>);
}

impl<F> Observer for F
where
    F: FnMut(Event<'_>),
{
    fn notify(&mut self, event: Event<'_>) {
        self(event)
    }
}

/// The trait that any scheduler has to implement.
pub trait Scheduler {
    /// Creates a process for `script`, places it in the ready queue
    /// and returns its PID.
    fn admit(&mut self, script: Script, observer: &mut dyn Observer) -> Pid;

    /// Runs one dispatch cycle and reports what happened.
    ///
    /// Returns [`SchedulingDecision::Done`] once no process is ready or
    /// blocked. An error aborts the run, the process that caused it is
    /// dropped.
    fn next(&mut self, observer: &mut dyn Observer) -> Result<SchedulingDecision, SchedulerError>;

    /// Returns the list of processes the scheduler holds, ordered by PID.
    fn list(&self) -> Vec<&dyn Process>;

    /// Returns the counters accumulated so far.
    fn statistics(&self) -> &Statistics;

    /// Returns the quantum the scheduler was built with.
    fn quantum(&self) -> NonZeroUsize;

    /// Computes the aggregate figures over every process the scheduler holds.
    fn summary(&self) -> Summary {
        let switches = self.list().into_iter().map(|process| process.switches());
        self.statistics().summary(switches, self.quantum())
    }

    /// Runs dispatch cycles until every process has terminated.
    fn run(&mut self, observer: &mut dyn Observer) -> Result<Summary, SchedulerError> {
        loop {
            match self.next(observer)? {
                SchedulingDecision::Done => break,
                decision => log::debug!("{decision}"),
            }
        }
        let summary = self.summary();
        log::info!(
            "run finished: {} dispatches, {} slices",
            self.statistics().context_switches(),
            self.statistics().quantum_executions()
        );
        Ok(summary)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process is ready to be scheduled.
    Ready,

    /// The process is currently scheduled.
    Running,

    /// The process is waiting for a simulated I/O operation.
    Blocked {
        /// The number of aging steps left before the process is ready again.
        wait: usize,
    },

    /// The process has finished and will never be scheduled again.
    Terminated,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Running => write!(f, "RUNNING"),
            ProcessState::Blocked { wait } => write!(f, "BLOCKED {}", wait),
            ProcessState::Terminated => write!(f, "TERMINATED"),
        }
    }
}

/// The read-only view of a process control block.
pub trait Process {
    /// Return the PID of the process.
    fn pid(&self) -> Pid;

    /// Return the name of the process.
    fn name(&self) -> &str;

    /// Return the state of the process.
    fn state(&self) -> ProcessState;

    /// Return the index of the next instruction.
    fn program_counter(&self) -> usize;

    /// Return the register values.
    fn registers(&self) -> Registers;

    /// Returns how many times the process left the processor.
    fn switches(&self) -> usize;
}
