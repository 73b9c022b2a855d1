use std::fmt;

use serde::{Deserialize, Serialize};

/// The fan-out a port selects for its outbound associations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutboxKind {
    /// Exactly one external port.
    Standard,
    /// Any number of external ports.
    Broadcast,
    /// One external reference that is not a port.
    NonComponent,
}

impl OutboxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboxKind::Standard => "standard",
            OutboxKind::Broadcast => "broadcast",
            OutboxKind::NonComponent => "non-component",
        }
    }

    /// Whether outboxes of this kind target other ports.
    pub fn targets_ports(&self) -> bool {
        !matches!(self, OutboxKind::NonComponent)
    }
}

impl fmt::Display for OutboxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every outbox strategy.
///
/// Implementations own only associations, never the targets themselves, so
/// `disconnect` just forgets them. It must be idempotent: disconnecting an
/// outbox with nothing attached is a no-op.
pub trait PortOutbox {
    /// Which strategy this outbox implements.
    fn kind(&self) -> OutboxKind;

    /// True while at least one outbound association is held.
    fn is_connected(&self) -> bool;

    /// Sever every outbound association.
    fn disconnect(&mut self);
}
