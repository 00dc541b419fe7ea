//! # Transport Boundary
//!
//! The completion pipeline is invoked in-process by the transport layer
//! after request decoding; connection lifecycle, framing and idle detection
//! all live outside this crate. This module carries the two types that
//! cross the boundary: the acknowledgement returned for a completion
//! request, and the connection event hooks a transport may call into.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GridTaskError;

/// Acknowledgement returned to the transport once a completion request has
/// been classified and dispatched. Carries no payload; success is implicit
/// unless `process` returned an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionAck;

/// Idle side reported by transport-level idle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleState {
    ReaderIdle,
    WriterIdle,
    BothIdle,
}

/// Connection lifecycle hooks exposed by the transport layer.
///
/// The completion core is indifferent to these events; every method
/// defaults to a no-op, so implementors override only what they observe.
pub trait ConnectionEventHandler: Send + Sync {
    fn channel_connected(&self, _connection_id: Uuid) {}

    fn message_received(&self, _connection_id: Uuid, _bytes: usize) {}

    fn channel_idle(&self, _connection_id: Uuid, _state: IdleState) {}

    fn exception_caught(&self, _connection_id: Uuid, _error: &GridTaskError) {}
}

/// Default handler: ignores every connection event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConnectionHandler;

impl ConnectionEventHandler for NoopConnectionHandler {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler_accepts_every_event() {
        let handler = NoopConnectionHandler;
        let connection_id = Uuid::new_v4();

        handler.channel_connected(connection_id);
        handler.message_received(connection_id, 128);
        handler.channel_idle(connection_id, IdleState::BothIdle);
        handler.exception_caught(
            connection_id,
            &GridTaskError::TransportError("broken pipe".to_string()),
        );
    }
}
