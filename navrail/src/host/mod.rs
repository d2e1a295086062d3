mod bridge;
mod errors;
mod protocol;
pub(crate) mod stdin;
pub(crate) mod storage;

#[cfg(test)]
pub(crate) use bridge::RecordingBridge;
pub(crate) use bridge::{HostBridge, StdoutBridge};
pub(crate) use errors::StorageError;
pub(crate) use protocol::{InboundMessage, OutboundMessage, RenderArgs};
