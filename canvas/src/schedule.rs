use std::sync::{Arc, Mutex};

use crate::Document;

pub type SolutionCallback = Box<dyn FnOnce(&mut Document) + Send>;

struct ScheduledTask {
    due_tick: u64,
    seq: u64,
    callback: SolutionCallback,
}

struct ScheduleInner {
    tick: u64,
    next_seq: u64,
    tasks: Vec<ScheduledTask>,
}

/// Shared handle onto the document's solution queue. Clones refer to the
/// same queue, so foreign threads (e.g. a socket handler) can request work
/// that the owning context later runs via `Document::run_tick`.
#[derive(Clone)]
pub struct SolutionSchedule {
    inner: Arc<Mutex<ScheduleInner>>,
}

impl Default for SolutionSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionSchedule {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScheduleInner {
                tick: 0,
                next_seq: 0,
                tasks: Vec::new(),
            })),
        }
    }

    /// Enqueue a callback to run `delay_ticks` ticks from now. Callbacks
    /// sharing a due tick run in enqueue order. A zero delay still waits for
    /// the next tick, so a callback never runs inside the tick that
    /// scheduled it.
    pub fn schedule<F>(&self, delay_ticks: u64, callback: F)
    where
        F: FnOnce(&mut Document) + Send + 'static,
    {
        match self.inner.lock() {
            Ok(mut inner) => {
                let due_tick = inner.tick.saturating_add(delay_ticks);
                let seq = inner.next_seq;
                inner.next_seq = inner.next_seq.wrapping_add(1);
                inner.tasks.push(ScheduledTask {
                    due_tick,
                    seq,
                    callback: Box::new(callback),
                });
            }
            Err(_) => {
                log::warn!("solution queue lock poisoned; dropping scheduled callback");
            }
        }
    }

    pub fn tick(&self) -> u64 {
        self.inner.lock().map(|inner| inner.tick).unwrap_or(0)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.tasks.len()).unwrap_or(0)
    }

    /// Advance one tick and pull out every callback that is now due,
    /// ordered by (due tick, enqueue order).
    pub(crate) fn advance(&self) -> Vec<SolutionCallback> {
        let mut due = Vec::new();
        if let Ok(mut inner) = self.inner.lock() {
            inner.tick = inner.tick.wrapping_add(1);
            let tick = inner.tick;
            let mut remaining = Vec::with_capacity(inner.tasks.len());
            for task in inner.tasks.drain(..) {
                if task.due_tick <= tick {
                    due.push(task);
                } else {
                    remaining.push(task);
                }
            }
            inner.tasks = remaining;
        }
        due.sort_by_key(|task| (task.due_tick, task.seq));
        due.into_iter().map(|task| task.callback).collect()
    }
}
