use std::sync::{Arc, Mutex};

#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
    #[error("send failed")]
    SendFailed,
    #[error("subscribe failed")]
    SubscribeFailed,
}

/// Handler invoked on the transport's own context for every inbound text
/// frame. Implementations must not assume the canvas context.
pub type MessageHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Text-frame transport seam. Connection lifecycle (connect, reconnect,
/// handshake) belongs to the implementation; consumers only subscribe one
/// handler and send text.
pub trait MessageEndpoint: Send + Sync {
    /// Install `handler` as the single inbound subscriber, replacing any
    /// previous one. A handler never fires twice for one frame.
    fn subscribe(&self, handler: MessageHandler) -> Result<(), EndpointError>;

    /// Remove the current subscriber. Unsubscribing when nothing is
    /// attached is a no-op.
    fn unsubscribe(&self) -> Result<(), EndpointError>;

    fn send(&self, text: &str) -> Result<(), EndpointError>;
}

/// Loopback endpoint for in-process hosts and tests: `deliver` plays the
/// role of the socket thread, outbound frames are recorded.
pub struct InProcessEndpoint {
    handler: Mutex<Option<MessageHandler>>,
    sent: Mutex<Vec<String>>,
}

impl Default for InProcessEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl InProcessEndpoint {
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(None),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Push an inbound frame through the subscribed handler, on the calling
    /// thread. Returns false when no handler is attached.
    pub fn deliver(&self, text: &str) -> bool {
        let handler = match self.handler.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        };
        match handler {
            Some(handler) => {
                handler(text);
                true
            }
            None => {
                log::debug!("dropping inbound frame: no subscriber");
                false
            }
        }
    }

    pub fn has_subscriber(&self) -> bool {
        self.handler
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn take_sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .map(|mut sent| std::mem::take(&mut *sent))
            .unwrap_or_default()
    }
}

impl MessageEndpoint for InProcessEndpoint {
    fn subscribe(&self, handler: MessageHandler) -> Result<(), EndpointError> {
        let mut slot = self
            .handler
            .lock()
            .map_err(|_| EndpointError::SubscribeFailed)?;
        *slot = Some(handler);
        Ok(())
    }

    fn unsubscribe(&self) -> Result<(), EndpointError> {
        let mut slot = self
            .handler
            .lock()
            .map_err(|_| EndpointError::SubscribeFailed)?;
        *slot = None;
        Ok(())
    }

    fn send(&self, text: &str) -> Result<(), EndpointError> {
        let mut sent = self.sent.lock().map_err(|_| EndpointError::SendFailed)?;
        sent.push(text.to_string());
        Ok(())
    }
}
