//! A run journal
//!
//! This records the events of a [`scheduler`] run and renders them as the
//! human readable log of the simulation, one line per event.

use std::fmt::{self, Display};

use scheduler::{Event, Observer, Register, Registers, Summary};

mod file;

pub use crate::file::LogFile;

/// One journal entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A process was admitted to the ready queue.
    Loaded(String),

    /// A process started a dispatch slice.
    Running(String),

    /// A process left the processor after a number of instructions.
    Interrupted { name: String, executed: usize },

    /// A process started an I/O operation.
    IoStarted(String),

    /// A process finished.
    Terminated { name: String, registers: Registers },

    /// The figures of the whole run.
    Summary(Summary),

    /// The run was aborted.
    Error(String),
}

impl From<Event<'_>> for Entry {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::Admitted { name, .. } => Entry::Loaded(name.to_string()),
            Event::Dispatched { name, .. } => Entry::Running(name.to_string()),
            Event::Interrupted { name, executed, .. } => Entry::Interrupted {
                name: name.to_string(),
                executed,
            },
            Event::IoStarted { name, .. } => Entry::IoStarted(name.to_string()),
            Event::Terminated {
                name, registers, ..
            } => Entry::Terminated {
                name: name.to_string(),
                registers,
            },
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Loaded(name) => write!(f, "Carregando {name}"),
            Entry::Running(name) => write!(f, "Executando {name}"),
            Entry::Interrupted { name, executed } => {
                write!(f, "Interrompendo {name} após {executed} instruções")
            }
            Entry::IoStarted(name) => write!(f, "E/S iniciada em {name}"),
            Entry::Terminated { name, registers } => write!(
                f,
                "{name} terminado. A={}. B={}. C={}. D={}",
                registers.get(Register::A),
                registers.get(Register::B),
                registers.get(Register::C),
                registers.get(Register::D)
            ),
            Entry::Summary(summary) => {
                writeln!(f, "MÉDIA DE TROCAS: {:.2}", summary.average_switches)?;
                writeln!(f, "MÉDIA DE INSTRUÇÕES: {:.2}", summary.average_instructions)?;
                write!(f, "QUANTUM: {}", summary.quantum)
            }
            Entry::Error(message) => write!(f, "[ERRO] {message}"),
        }
    }
}

/// Collects the entries of a run, in order.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new() -> Journal {
        Journal::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn record_summary(&mut self, summary: Summary) {
        self.entries.push(Entry::Summary(summary));
    }

    pub fn record_error(&mut self, error: &dyn Display) {
        self.entries.push(Entry::Error(error.to_string()));
    }
}

impl Observer for Journal {
    fn notify(&mut self, event: Event<'_>) {
        log::trace!("{event}");
        self.entries.push(event.into());
    }
}

/// Format the [`Journal`]'s entries to a [`String`], one line each.
///
/// * `entries` - the entries recorded by the [`Journal`].
///
/// ## Example
///
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use journal::{format_logs, Journal};
/// use scheduler::{round_robin, Scheduler, Script};
///
/// let mut journal = Journal::new();
/// let mut scheduler = round_robin(NonZeroUsize::new(2).unwrap());
/// scheduler.admit(Script::new("P1", ["A=1", "SAIDA"]), &mut journal);
/// let summary = scheduler.run(&mut journal).unwrap();
/// journal.record_summary(summary);
///
/// println!("{}", format_logs(journal.entries()));
/// ```
pub fn format_logs(entries: &[Entry]) -> String {
    entries.iter().map(|entry| format!("{entry}\n")).collect()
}
