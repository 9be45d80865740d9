use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SyncError;

pub const PARAMETERS_ACTION: &str = "mnml:parameters";

/// Inbound wire record: one value for one widget, addressed by its
/// canonical uuid string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessage {
    pub guid: Uuid,
    pub value: f64,
}

impl UpdateMessage {
    pub fn decode(raw: &str) -> Result<Self, SyncError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Public state of one connected slider. Field declaration order is the
/// wire order: step, min, max, name, value, guid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub name: String,
    pub value: f64,
    pub guid: Uuid,
}

/// Outbound envelope forwarded to the GUI by an external sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEnvelope {
    pub action: String,
    pub data: Vec<SliderSnapshot>,
}

impl ParameterEnvelope {
    pub fn new(data: Vec<SliderSnapshot>) -> Self {
        Self {
            action: PARAMETERS_ACTION.to_string(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
