use super::{
    BroadcastPortOutbox, NonComponentPortOutbox, OutboxKind, PortOutbox, StandardPortOutbox,
};
use crate::port::PortAddress;

/// The outbox a port owns, with the strategy fixed at construction.
#[derive(Debug)]
pub enum Outbox<H> {
    Standard(StandardPortOutbox<H>),
    Broadcast(BroadcastPortOutbox<H>),
    NonComponent(NonComponentPortOutbox<H>),
}

impl<H> Outbox<H> {
    /// Build an empty outbox of the given kind.
    pub fn new(kind: OutboxKind) -> Self {
        match kind {
            OutboxKind::Standard => Outbox::Standard(StandardPortOutbox::new()),
            OutboxKind::Broadcast => Outbox::Broadcast(BroadcastPortOutbox::new()),
            OutboxKind::NonComponent => Outbox::NonComponent(NonComponentPortOutbox::new()),
        }
    }

    pub fn as_standard(&self) -> Option<&StandardPortOutbox<H>> {
        match self {
            Outbox::Standard(outbox) => Some(outbox),
            _ => None,
        }
    }

    pub fn as_broadcast(&self) -> Option<&BroadcastPortOutbox<H>> {
        match self {
            Outbox::Broadcast(outbox) => Some(outbox),
            _ => None,
        }
    }

    pub fn as_non_component(&self) -> Option<&NonComponentPortOutbox<H>> {
        match self {
            Outbox::NonComponent(outbox) => Some(outbox),
            _ => None,
        }
    }

    /// Addresses of every port this outbox is associated with.
    pub fn target_addresses(&self) -> Vec<PortAddress> {
        match self {
            Outbox::Standard(outbox) => outbox
                .target()
                .map(|link| vec![link.address().clone()])
                .unwrap_or_default(),
            Outbox::Broadcast(outbox) => outbox
                .targets()
                .iter()
                .map(|link| link.address().clone())
                .collect(),
            Outbox::NonComponent(_) => Vec::new(),
        }
    }

    fn strategy(&self) -> &dyn PortOutbox {
        match self {
            Outbox::Standard(outbox) => outbox,
            Outbox::Broadcast(outbox) => outbox,
            Outbox::NonComponent(outbox) => outbox,
        }
    }

    fn strategy_mut(&mut self) -> &mut dyn PortOutbox {
        match self {
            Outbox::Standard(outbox) => outbox,
            Outbox::Broadcast(outbox) => outbox,
            Outbox::NonComponent(outbox) => outbox,
        }
    }
}

impl<H> PortOutbox for Outbox<H> {
    fn kind(&self) -> OutboxKind {
        self.strategy().kind()
    }

    fn is_connected(&self) -> bool {
        self.strategy().is_connected()
    }

    fn disconnect(&mut self) {
        self.strategy_mut().disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_the_requested_variant() {
        for kind in [
            OutboxKind::Standard,
            OutboxKind::Broadcast,
            OutboxKind::NonComponent,
        ] {
            let outbox: Outbox<()> = Outbox::new(kind);
            assert_eq!(outbox.kind(), kind);
            assert!(!outbox.is_connected());
            assert!(outbox.target_addresses().is_empty());
        }
    }

    #[test]
    fn variant_accessors_match_kind() {
        let outbox: Outbox<()> = Outbox::new(OutboxKind::Broadcast);
        assert!(outbox.as_broadcast().is_some());
        assert!(outbox.as_standard().is_none());
        assert!(outbox.as_non_component().is_none());
    }

    #[test]
    fn disconnect_goes_through_the_variant() {
        let mut outbox: Outbox<&str> = Outbox::new(OutboxKind::NonComponent);
        if let Outbox::NonComponent(inner) = &mut outbox {
            inner.connect("sink");
        }
        assert!(outbox.is_connected());
        outbox.disconnect();
        assert!(!outbox.is_connected());
    }
}
