use std::sync::{Arc, Mutex};
use std::time::Instant;

use canvas::Document;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::protocol::UpdateMessage;
use crate::settings::SyncSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Scheduled,
    Suppressing,
}

struct GateShared {
    state: GateState,
    is_updating: bool,
    suppress_until: Option<Instant>,
    applied: Option<UpdateMessage>,
}

/// Debounced apply gate for externally driven slider edits.
///
/// Frames equal to the last seen raw text are absorbed, a fresh frame is
/// applied through the solution queue, and for a suppression window after
/// each apply the `is_updating` flag stays up so downstream consumers can
/// tell an external edit from a user edit. Echoes arriving inside the
/// window keep it open instead of re-triggering work.
pub struct SliderUpdateGate {
    owner: Uuid,
    settings: SyncSettings,
    clock: Arc<dyn Clock>,
    last_raw: Option<String>,
    shared: Arc<Mutex<GateShared>>,
}

impl SliderUpdateGate {
    /// `owner` is the id of the hosting component, marked dirty when the
    /// window closes so consumers of the flag re-evaluate.
    pub fn new(owner: Uuid) -> Self {
        Self::with_clock(owner, Arc::new(SystemClock), SyncSettings::default())
    }

    pub fn with_clock(owner: Uuid, clock: Arc<dyn Clock>, settings: SyncSettings) -> Self {
        Self {
            owner,
            settings,
            clock,
            last_raw: None,
            shared: Arc::new(Mutex::new(GateShared {
                state: GateState::Idle,
                is_updating: false,
                suppress_until: None,
                applied: None,
            })),
        }
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn state(&self) -> GateState {
        self.shared
            .lock()
            .map(|shared| shared.state)
            .unwrap_or(GateState::Idle)
    }

    pub fn is_updating(&self) -> bool {
        self.shared
            .lock()
            .map(|shared| shared.is_updating)
            .unwrap_or(false)
    }

    /// Solve-time entry point: feed the raw frame observed on the input and
    /// get back the current `is_updating` output.
    pub fn solve(&mut self, raw: &str, doc: &mut Document) -> bool {
        let (state, is_updating, applied) = self.snapshot();

        if self.last_raw.as_deref() == Some(raw) {
            // Echo of the frame just seen: keep the window open, nothing else.
            if state == GateState::Suppressing {
                self.restart_window();
            }
            return is_updating;
        }
        self.last_raw = Some(raw.to_string());

        let message = match UpdateMessage::decode(raw) {
            Ok(message) => message,
            Err(error) => {
                log::warn!("dropping malformed slider update: {error}");
                return is_updating;
            }
        };
        let known = doc
            .find_object(message.guid)
            .and_then(|object| object.as_number_slider())
            .is_some();
        if !known {
            log::debug!("dropping slider update for unknown object {}", message.guid);
            return is_updating;
        }

        if state == GateState::Suppressing {
            self.restart_window();
            if applied.as_ref() == Some(&message) {
                // Window extended; the applied value already matches.
                return is_updating;
            }
        }

        if let Ok(mut shared) = self.shared.lock() {
            shared.state = GateState::Scheduled;
        }
        let shared = self.shared.clone();
        let clock = self.clock.clone();
        let window = self.settings.suppress_window;
        doc.schedule_handle()
            .schedule(self.settings.apply_delay_ticks, move |doc| {
                if let Some(slider) = doc
                    .find_object_mut(message.guid)
                    .and_then(|object| object.as_number_slider_mut())
                {
                    slider.set_value(message.value);
                    doc.mark_dirty(message.guid, false);
                }
                if let Ok(mut shared) = shared.lock() {
                    shared.is_updating = true;
                    shared.suppress_until = Some(clock.now() + window);
                    shared.applied = Some(message);
                    shared.state = GateState::Suppressing;
                }
            });

        is_updating
    }

    /// Canvas-context tick: close the suppression window once it has
    /// elapsed with no further frames. Returns the current flag.
    pub fn poll(&mut self, doc: &mut Document) -> bool {
        let now = self.clock.now();
        let mut expired = false;
        let mut is_updating = false;
        if let Ok(mut shared) = self.shared.lock() {
            if shared.state == GateState::Suppressing {
                if let Some(deadline) = shared.suppress_until {
                    if now >= deadline {
                        shared.is_updating = false;
                        shared.suppress_until = None;
                        shared.state = GateState::Idle;
                        expired = true;
                    }
                }
            }
            is_updating = shared.is_updating;
        }
        if expired {
            doc.mark_dirty(self.owner, false);
        }
        is_updating
    }

    fn restart_window(&self) {
        let deadline = self.clock.now() + self.settings.suppress_window;
        if let Ok(mut shared) = self.shared.lock() {
            shared.suppress_until = Some(deadline);
        }
    }

    fn snapshot(&self) -> (GateState, bool, Option<UpdateMessage>) {
        self.shared
            .lock()
            .map(|shared| (shared.state, shared.is_updating, shared.applied.clone()))
            .unwrap_or((GateState::Idle, false, None))
    }
}
