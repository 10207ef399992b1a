use std::num::NonZeroUsize;

/// Counters of a single run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Statistics {
    context_switches: usize,
    quantum_executions: usize,
    instructions_in_quantums: usize,
}

impl Statistics {
    /// A process moved from the ready queue to the processor.
    pub(crate) fn record_dispatch(&mut self) {
        self.context_switches += 1;
    }

    /// A dispatch slice ended after `executed` instructions.
    pub(crate) fn record_slice(&mut self, executed: usize) {
        self.quantum_executions += 1;
        self.instructions_in_quantums += executed;
    }

    pub fn context_switches(&self) -> usize {
        self.context_switches
    }

    pub fn quantum_executions(&self) -> usize {
        self.quantum_executions
    }

    pub fn instructions_in_quantums(&self) -> usize {
        self.instructions_in_quantums
    }

    /// Average number of instructions executed per dispatch slice, 0 when
    /// no slice ran.
    pub fn average_instructions(&self) -> f64 {
        if self.quantum_executions == 0 {
            return 0.0;
        }
        self.instructions_in_quantums as f64 / self.quantum_executions as f64
    }

    /// Builds the final figures from the switch counters of every process.
    pub fn summary<I>(&self, switches: I, quantum: NonZeroUsize) -> Summary
    where
        I: IntoIterator<Item = usize>,
    {
        let (processes, total) = switches
            .into_iter()
            .fold((0usize, 0usize), |(count, sum), switches| (count + 1, sum + switches));

        let average_switches = if processes == 0 {
            0.0
        } else {
            total as f64 / processes as f64
        };

        Summary {
            average_switches,
            average_instructions: self.average_instructions(),
            quantum,
        }
    }
}

/// The figures reported at the end of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Summary {
    /// Average number of times a process left the processor.
    pub average_switches: f64,

    /// Average number of instructions executed per dispatch slice.
    pub average_instructions: f64,

    /// The quantum of the run.
    pub quantum: NonZeroUsize,
}
