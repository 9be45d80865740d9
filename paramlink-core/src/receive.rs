use std::sync::{Arc, Mutex};

use canvas::{Document, SolutionSchedule};
use endpoint::{EndpointError, MessageEndpoint};
use uuid::Uuid;

use crate::protocol::UpdateMessage;
use crate::settings::SyncSettings;
use crate::SyncError;

/// Inbound half of the bridge. Buffers the newest raw frame from the
/// endpoint in a single-slot mailbox and applies it to the addressed slider
/// from inside the document's solution queue, so the socket context never
/// touches a widget.
pub struct UpdateReceiver {
    settings: SyncSettings,
    schedule: SolutionSchedule,
    pending: Arc<Mutex<Option<String>>>,
    remarks: Arc<Mutex<Vec<String>>>,
    attached: Option<Arc<dyn MessageEndpoint>>,
}

impl UpdateReceiver {
    pub fn new(schedule: SolutionSchedule) -> Self {
        Self::with_settings(schedule, SyncSettings::default())
    }

    pub fn with_settings(schedule: SolutionSchedule, settings: SyncSettings) -> Self {
        Self {
            settings,
            schedule,
            pending: Arc::new(Mutex::new(None)),
            remarks: Arc::new(Mutex::new(Vec::new())),
            attached: None,
        }
    }

    /// Subscribe to `endpoint`, detaching any previous subscription first so
    /// re-attaching never double-fires.
    pub fn attach(&mut self, endpoint: Arc<dyn MessageEndpoint>) -> Result<(), EndpointError> {
        if let Some(previous) = self.attached.take() {
            let _ = previous.unsubscribe();
        }
        let pending = self.pending.clone();
        let remarks = self.remarks.clone();
        let schedule = self.schedule.clone();
        let delay = self.settings.apply_delay_ticks;
        endpoint.subscribe(Arc::new(move |raw: &str| {
            if let Ok(mut slot) = pending.lock() {
                *slot = Some(raw.to_string());
            }
            let pending = pending.clone();
            let remarks = remarks.clone();
            schedule.schedule(delay, move |doc| {
                apply_pending(doc, &pending, &remarks);
            });
        }))?;
        self.attached = Some(endpoint);
        Ok(())
    }

    /// Drop the current subscription. Detaching a never-attached receiver
    /// is a no-op.
    pub fn detach(&mut self) {
        if let Some(previous) = self.attached.take() {
            let _ = previous.unsubscribe();
        }
    }

    /// Peek at the not-yet-applied frame, if any.
    pub fn pending(&self) -> Option<String> {
        self.pending.lock().ok().and_then(|slot| slot.clone())
    }

    /// Advisory notes recorded for successfully applied updates, oldest
    /// first. Dropped frames never produce one.
    pub fn take_remarks(&self) -> Vec<String> {
        self.remarks
            .lock()
            .map(|mut remarks| std::mem::take(&mut *remarks))
            .unwrap_or_default()
    }
}

fn apply_pending(
    doc: &mut Document,
    pending: &Mutex<Option<String>>,
    remarks: &Mutex<Vec<String>>,
) {
    let raw = match pending.lock() {
        Ok(mut slot) => slot.take(),
        Err(_) => None,
    };
    // Empty slot: an earlier apply already consumed a newer frame.
    let Some(raw) = raw else {
        return;
    };
    match apply_update(doc, &raw) {
        Ok(_) => {
            if let Ok(mut remarks) = remarks.lock() {
                remarks.push(raw);
            }
        }
        Err(SyncError::UnknownIdentifier(id)) => {
            log::debug!("dropping update for unknown object {id}");
        }
        Err(SyncError::WrongWidgetKind(id)) => {
            log::debug!("dropping update for non-slider object {id}");
        }
        Err(error) => {
            log::warn!("dropping inbound frame: {error}");
        }
    }
}

/// Decode `raw` and write its value into the addressed slider, marking the
/// slider dirty without forcing an immediate re-solve.
pub fn apply_update(doc: &mut Document, raw: &str) -> Result<Uuid, SyncError> {
    let message = UpdateMessage::decode(raw)?;
    let slider = doc
        .find_object_mut(message.guid)
        .ok_or(SyncError::UnknownIdentifier(message.guid))?
        .as_number_slider_mut()
        .ok_or(SyncError::WrongWidgetKind(message.guid))?;
    slider.set_value(message.value);
    doc.mark_dirty(message.guid, false);
    Ok(message.guid)
}
