use super::{OutboxKind, PortOutbox};
use crate::port::PortLink;

/// One-to-many outbox: holds a set of distinct external ports.
///
/// Order carries no meaning, but insertion order is kept so snapshots come
/// out the same way every time. Links whose target port has been dropped are
/// pruned on the next `connect` and never count as connected.
#[derive(Debug)]
pub struct BroadcastPortOutbox<H> {
    targets: Vec<PortLink<H>>,
}

impl<H> Default for BroadcastPortOutbox<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> BroadcastPortOutbox<H> {
    pub fn new() -> Self {
        BroadcastPortOutbox {
            targets: Vec::new(),
        }
    }

    /// Add `target` unless it is already a member. Returns whether it was added.
    pub fn connect(&mut self, target: PortLink<H>) -> bool {
        let before = self.targets.len();
        self.targets.retain(PortLink::is_alive);
        if self.targets.len() != before {
            tracing::trace!(pruned = before - self.targets.len(), "dead broadcast targets pruned");
        }
        if self.contains(&target) {
            tracing::trace!(target = %target.address(), "broadcast target already connected");
            return false;
        }
        self.targets.push(target);
        true
    }

    /// Remove exactly `target`. Returns whether it was a member.
    pub fn disconnect_from(&mut self, target: &PortLink<H>) -> bool {
        let before = self.targets.len();
        self.targets.retain(|existing| existing != target);
        self.targets.len() != before
    }

    pub fn contains(&self, target: &PortLink<H>) -> bool {
        self.targets.iter().any(|existing| existing == target)
    }

    pub fn targets(&self) -> &[PortLink<H>] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<H> PortOutbox for BroadcastPortOutbox<H> {
    fn kind(&self) -> OutboxKind {
        OutboxKind::Broadcast
    }

    fn is_connected(&self) -> bool {
        self.targets.iter().any(PortLink::is_alive)
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }
}
