use std::collections::VecDeque;

use crate::{Pid, Process, ProcessRecord};

/// The ready queue and the blocked set.
#[derive(Debug, Default)]
pub struct QueueManager {
    ready: VecDeque<ProcessRecord>,
    blocked: VecDeque<ProcessRecord>,
}

impl QueueManager {
    pub fn new() -> Self {
        QueueManager::default()
    }

    /// Appends a ready process to the tail of the ready queue.
    pub fn enqueue(&mut self, process: ProcessRecord) {
        self.ready.push_back(process);
    }

    /// Takes the head of the ready queue.
    pub fn next_ready(&mut self) -> Option<ProcessRecord> {
        self.ready.pop_front()
    }

    /// Adds a blocked process to the blocked set.
    pub fn block(&mut self, process: ProcessRecord) {
        self.blocked.push_back(process);
    }

    /// Ages every process that is blocked when the call starts by one step.
    ///
    /// Processes whose wait is over are appended to the ready queue in the
    /// order they blocked. Returns their PIDs.
    pub fn age_blocked(&mut self) -> Vec<Pid> {
        let mut woken = Vec::new();
        for _ in 0..self.blocked.len() {
            let Some(mut process) = self.blocked.pop_front() else {
                break;
            };
            if process.tick() {
                woken.push(process.pid());
                self.ready.push_back(process);
            } else {
                self.blocked.push_back(process);
            }
        }
        woken
    }

    /// Both the ready queue and the blocked set are empty.
    pub fn is_drained(&self) -> bool {
        self.ready.is_empty() && self.blocked.is_empty()
    }

    pub fn ready(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.ready.iter()
    }

    pub fn blocked(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.blocked.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProcessState, Script};
    use pretty_assertions::assert_eq;

    fn record(pid: usize) -> ProcessRecord {
        ProcessRecord::new(Pid::FIRST + (pid - 1), Script::new(format!("P{pid}"), ["COM"]))
    }

    fn blocked(pid: usize, wait: usize) -> ProcessRecord {
        let mut process = record(pid);
        process.dispatch();
        process.block(wait);
        process
    }

    fn pids<'a>(processes: impl Iterator<Item = &'a ProcessRecord>) -> Vec<usize> {
        processes.map(|process| process.pid().get()).collect()
    }

    #[test]
    fn ready_queue_is_fifo() {
        let mut queues = QueueManager::new();
        for pid in 1..=3 {
            queues.enqueue(record(pid));
        }

        let popped: Vec<usize> = std::iter::from_fn(|| queues.next_ready())
            .map(|process| process.pid().get())
            .collect();
        assert_eq!(popped, vec![1, 2, 3]);
        assert!(queues.is_drained());
    }

    #[test]
    fn aging_wakes_in_blocking_order() {
        let mut queues = QueueManager::new();
        queues.enqueue(record(1));
        queues.block(blocked(2, 2));
        queues.block(blocked(3, 1));
        queues.block(blocked(4, 2));

        assert_eq!(queues.age_blocked(), vec![Pid::FIRST + 2]);
        assert_eq!(pids(queues.ready()), vec![1, 3]);
        assert_eq!(pids(queues.blocked()), vec![2, 4]);

        assert_eq!(queues.age_blocked(), vec![Pid::FIRST + 1, Pid::FIRST + 3]);
        assert_eq!(pids(queues.ready()), vec![1, 3, 2, 4]);
        assert!(queues.ready().all(|process| process.state() == ProcessState::Ready));
        assert_eq!(queues.blocked().count(), 0);
    }

    #[test]
    fn blocked_for_n_steps_wakes_on_the_nth() {
        let mut queues = QueueManager::new();
        queues.block(blocked(1, 4));

        for _ in 0..3 {
            assert!(queues.age_blocked().is_empty());
        }
        assert_eq!(queues.age_blocked(), vec![Pid::FIRST]);
        assert!(!queues.is_drained());
        assert_eq!(queues.next_ready().map(|process| process.pid()), Some(Pid::FIRST));
        assert!(queues.is_drained());
    }
}
