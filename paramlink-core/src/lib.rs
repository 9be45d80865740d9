use uuid::Uuid;

pub mod clock;
pub mod ports;
pub mod protocol;
pub mod publish;
pub mod receive;
pub mod settings;
pub mod update;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ports::{InputPort, PortAccess};
pub use protocol::{ParameterEnvelope, SliderSnapshot, UpdateMessage, PARAMETERS_ACTION};
pub use publish::{ParameterPublisher, PublishOutput};
pub use receive::{apply_update, UpdateReceiver};
pub use settings::SyncSettings;
pub use update::{GateState, SliderUpdateGate};

#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("malformed update message: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no document object with id {0}")]
    UnknownIdentifier(Uuid),
    #[error("document object {0} is not a number slider")]
    WrongWidgetKind(Uuid),
}
