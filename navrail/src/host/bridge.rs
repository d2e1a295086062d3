use std::io::Write;

use super::errors::HostError;
use super::protocol::OutboundMessage;

/// Outbound half of the host protocol.
pub(crate) trait HostBridge {
    /// Deliver one message to the host.
    fn send(&mut self, message: &OutboundMessage) -> Result<(), HostError>;
}

/// Writes each message as a JSON line on stdout.
#[derive(Debug, Default)]
pub(crate) struct StdoutBridge;

impl HostBridge for StdoutBridge {
    fn send(&mut self, message: &OutboundMessage) -> Result<(), HostError> {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, message)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Keeps every sent message in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingBridge {
    sent: std::rc::Rc<std::cell::RefCell<Vec<OutboundMessage>>>,
}

#[cfg(test)]
impl RecordingBridge {
    pub(crate) fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.borrow().clone()
    }
}

#[cfg(test)]
impl HostBridge for RecordingBridge {
    fn send(&mut self, message: &OutboundMessage) -> Result<(), HostError> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}
