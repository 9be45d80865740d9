use canvas::Document;
use uuid::Uuid;

use crate::ports::{self, InputPort};
use crate::protocol::{ParameterEnvelope, SliderSnapshot};

/// Result of one publisher evaluation: the envelope JSON and, unless the
/// identifier output is hidden, the parallel guid list.
#[derive(Debug, Clone)]
pub struct PublishOutput {
    pub json: String,
    pub guids: Option<Vec<Uuid>>,
}

/// Walks its input ports on every evaluation and serializes all connected
/// number sliders into the `mnml:parameters` envelope, ports in index
/// order, sources in connection order. Other producer kinds and deleted
/// sources are skipped, not errors.
pub struct ParameterPublisher {
    id: Uuid,
    ports: Vec<InputPort>,
    hidden: bool,
}

impl Default for ParameterPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterPublisher {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ports: vec![InputPort::numbered(1)],
            hidden: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ports(&self) -> &[InputPort] {
        &self.ports
    }

    /// Hiding the publisher suppresses the guid output, not the JSON.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Connect `source` into the port at `port_index`, growing the list so
    /// a free trailing port always remains.
    pub fn connect(&mut self, port_index: usize, source: Uuid) -> bool {
        let Some(port) = self.ports.get_mut(port_index) else {
            return false;
        };
        port.sources.push(source);
        self.ports_changed();
        true
    }

    /// Disconnect one source. Never shrinks the port list.
    pub fn disconnect(&mut self, port_index: usize, source: Uuid) -> bool {
        let Some(port) = self.ports.get_mut(port_index) else {
            return false;
        };
        let before = port.sources.len();
        port.sources.retain(|existing| *existing != source);
        let changed = port.sources.len() != before;
        if changed {
            self.ports_changed();
        }
        changed
    }

    /// Insert one empty port at `index`. Input side only, one per change.
    pub fn insert_port(&mut self, index: usize) -> bool {
        let inserted = ports::insert_port(&mut self.ports, index);
        if inserted {
            self.ports_changed();
        }
        inserted
    }

    /// Remove the port at `index`; refused while only one port remains.
    pub fn remove_port(&mut self, index: usize) -> bool {
        let removed = ports::remove_port(&mut self.ports, index);
        if removed {
            self.ports_changed();
        }
        removed
    }

    fn ports_changed(&mut self) {
        ports::ensure_trailing_spare(&mut self.ports);
    }

    pub fn solve(&self, doc: &Document) -> Result<PublishOutput, serde_json::Error> {
        let mut snapshots = Vec::new();
        let mut guids = Vec::new();
        for port in &self.ports {
            for source in &port.sources {
                let Some(slider) = doc
                    .find_object(*source)
                    .and_then(|object| object.as_number_slider())
                else {
                    continue;
                };
                snapshots.push(SliderSnapshot {
                    step: slider.step,
                    min: slider.min,
                    max: slider.max,
                    name: slider.display_name().to_string(),
                    value: slider.value(),
                    guid: slider.id,
                });
                guids.push(slider.id);
            }
        }
        let json = ParameterEnvelope::new(snapshots).to_json()?;
        Ok(PublishOutput {
            json,
            guids: if self.hidden { None } else { Some(guids) },
        })
    }
}
