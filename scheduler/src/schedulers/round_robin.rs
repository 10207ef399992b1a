use std::num::NonZeroUsize;

use log::debug;

use crate::interpreter;
use crate::SchedulingDecision::{Done, Idle, Run};
use crate::{
    Event, Exit, Observer, Pid, Process, ProcessRecord, QueueManager, Scheduler,
    SchedulerError, SchedulingDecision, Script, Statistics,
};

pub struct RoundRobin {
    queues: QueueManager,
    terminated: Vec<ProcessRecord>,
    next_pid: Pid,
    quantum: NonZeroUsize,
    statistics: Statistics,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin {
            queues: QueueManager::new(),
            terminated: Vec::new(),
            next_pid: Pid::FIRST,
            quantum,
            statistics: Statistics::default(),
        }
    }

    /// Admits every script, in order.
    pub fn with_scripts<I>(quantum: NonZeroUsize, scripts: I, observer: &mut dyn Observer) -> Self
    where
        I: IntoIterator<Item = Script>,
    {
        let mut scheduler = RoundRobin::new(quantum);
        for script in scripts {
            scheduler.admit(script, observer);
        }
        scheduler
    }

    /// The processes that finished, in termination order.
    pub fn terminated(&self) -> &[ProcessRecord] {
        &self.terminated
    }

    pub fn queues(&self) -> &QueueManager {
        &self.queues
    }

    fn wait(&self) -> usize {
        self.quantum.get().saturating_mul(2)
    }

    fn dispatch(
        &mut self,
        mut process: ProcessRecord,
        observer: &mut dyn Observer,
    ) -> Result<SchedulingDecision, SchedulerError> {
        self.statistics.record_dispatch();
        process.dispatch();
        observer.notify(Event::Dispatched {
            pid: process.pid(),
            name: process.name(),
        });

        let mut executed = 0;
        let mut io_requested = false;
        while executed < self.quantum.get() && !process.finished() {
            if interpreter::step(&mut process)? {
                executed += 1;
            } else {
                io_requested = true;
                break;
            }
        }
        self.statistics.record_slice(executed);

        let pid = process.pid();
        let exit = if io_requested {
            process.block(self.wait());
            observer.notify(Event::Interrupted {
                pid,
                name: process.name(),
                executed,
            });
            observer.notify(Event::IoStarted {
                pid,
                name: process.name(),
            });
            self.queues.block(process);
            Exit::Blocked
        } else if process.finished() {
            process.terminate();
            observer.notify(Event::Terminated {
                pid,
                name: process.name(),
                registers: process.registers(),
            });
            self.terminated.push(process);
            Exit::Terminated
        } else {
            process.preempt();
            observer.notify(Event::Interrupted {
                pid,
                name: process.name(),
                executed,
            });
            self.queues.enqueue(process);
            Exit::Expired
        };

        Ok(Run {
            pid,
            executed,
            exit,
        })
    }
}

impl Scheduler for RoundRobin {
    fn admit(&mut self, script: Script, observer: &mut dyn Observer) -> Pid {
        let pid = self.next_pid;
        self.next_pid = pid + 1;

        let process = ProcessRecord::new(pid, script);
        observer.notify(Event::Admitted {
            pid,
            name: process.name(),
        });
        debug!(
            "admitted {} ({}) with {} instructions",
            pid,
            process.name(),
            process.program().len()
        );
        self.queues.enqueue(process);
        pid
    }

    fn next(&mut self, observer: &mut dyn Observer) -> Result<SchedulingDecision, SchedulerError> {
        if self.queues.is_drained() {
            return Ok(Done);
        }

        let decision = match self.queues.next_ready() {
            Some(process) => self.dispatch(process, observer)?,
            None => Idle,
        };

        for pid in self.queues.age_blocked() {
            debug!("{pid} finished its I/O");
        }

        Ok(decision)
    }

    fn list(&self) -> Vec<&dyn Process> {
        let mut vec: Vec<&dyn Process> = Vec::new();
        for process in self.queues.ready() {
            vec.push(process);
        }
        for process in self.queues.blocked() {
            vec.push(process);
        }
        for process in &self.terminated {
            vec.push(process);
        }
        vec.sort_by_key(|process| process.pid());
        vec
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn quantum(&self) -> NonZeroUsize {
        self.quantum
    }
}
