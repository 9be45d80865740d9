use uuid::Uuid;

pub mod schedule;
pub mod widgets;

pub use schedule::{SolutionCallback, SolutionSchedule};
pub use widgets::{DocumentObject, NumberSlider, TextPanel};

/// In-memory document of identity-keyed widgets plus the cooperative
/// solution queue. All widget mutation happens on the thread that calls
/// `run_tick`; other threads only enqueue work through a cloned
/// `SolutionSchedule` handle.
pub struct Document {
    objects: Vec<DocumentObject>,
    schedule: SolutionSchedule,
    dirty: Vec<(Uuid, bool)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            schedule: SolutionSchedule::new(),
            dirty: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: DocumentObject) -> Uuid {
        let id = object.id();
        self.objects.push(object);
        id
    }

    pub fn remove_object(&mut self, id: Uuid) -> bool {
        let before = self.objects.len();
        self.objects.retain(|object| object.id() != id);
        self.objects.len() != before
    }

    pub fn objects(&self) -> &[DocumentObject] {
        &self.objects
    }

    pub fn find_object(&self, id: Uuid) -> Option<&DocumentObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn find_object_mut(&mut self, id: Uuid) -> Option<&mut DocumentObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    /// Cloneable handle for scheduling callbacks from any thread.
    pub fn schedule_handle(&self) -> SolutionSchedule {
        self.schedule.clone()
    }

    pub fn tick(&self) -> u64 {
        self.schedule.tick()
    }

    /// Record that `id` needs re-evaluation. `force_immediate` mirrors the
    /// canvas distinction between "recompute now" and "recompute at the
    /// next solution"; the document only records the request.
    pub fn mark_dirty(&mut self, id: Uuid, force_immediate: bool) {
        self.dirty.push((id, force_immediate));
    }

    pub fn dirty(&self) -> &[(Uuid, bool)] {
        &self.dirty
    }

    pub fn take_dirty(&mut self) -> Vec<(Uuid, bool)> {
        std::mem::take(&mut self.dirty)
    }

    /// Advance the solution clock one tick and run every callback that came
    /// due, in FIFO order per due tick.
    pub fn run_tick(&mut self) {
        let callbacks = self.schedule.advance();
        for callback in callbacks {
            callback(self);
        }
    }

    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.run_tick();
        }
    }
}
