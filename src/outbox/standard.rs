use super::{OutboxKind, PortOutbox};
use crate::port::PortLink;

/// One-to-one outbox: holds at most one external port.
///
/// A target whose port has been dropped stays recorded but no longer counts
/// as connected.
#[derive(Debug)]
pub struct StandardPortOutbox<H> {
    target: Option<PortLink<H>>,
}

impl<H> Default for StandardPortOutbox<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> StandardPortOutbox<H> {
    pub fn new() -> Self {
        StandardPortOutbox { target: None }
    }

    /// Associate with `target`, silently replacing any previous association.
    pub fn connect(&mut self, target: PortLink<H>) {
        if let Some(previous) = self.target.replace(target) {
            tracing::trace!(previous = %previous.address(), "standard outbox target replaced");
        }
    }

    /// Clear the association if it is `target`. Returns whether it was.
    pub fn disconnect_from(&mut self, target: &PortLink<H>) -> bool {
        if self.target.as_ref() == Some(target) {
            self.target = None;
            true
        } else {
            false
        }
    }

    pub fn target(&self) -> Option<&PortLink<H>> {
        self.target.as_ref()
    }
}

impl<H> PortOutbox for StandardPortOutbox<H> {
    fn kind(&self) -> OutboxKind {
        OutboxKind::Standard
    }

    fn is_connected(&self) -> bool {
        self.target.as_ref().is_some_and(PortLink::is_alive)
    }

    fn disconnect(&mut self) {
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{InterfacePort, SharedPort};

    fn port(id: &str) -> SharedPort<()> {
        InterfacePort::initialized(id, OutboxKind::Standard).into_shared()
    }

    #[test]
    fn connect_overwrites_instead_of_accumulating() {
        let a = port("a");
        let b = port("b");
        let mut outbox = StandardPortOutbox::new();

        outbox.connect(PortLink::to(&a).unwrap());
        outbox.connect(PortLink::to(&b).unwrap());

        let target = outbox.target().unwrap();
        assert!(target.points_to(&b));
        assert!(!target.points_to(&a));
    }

    #[test]
    fn disconnect_clears_after_any_sequence() {
        let a = port("a");
        let b = port("b");
        let mut outbox = StandardPortOutbox::new();
        outbox.connect(PortLink::to(&a).unwrap());
        outbox.connect(PortLink::to(&b).unwrap());
        outbox.connect(PortLink::to(&a).unwrap());

        outbox.disconnect();
        assert!(outbox.target().is_none());
        assert!(!outbox.is_connected());

        // Idempotent.
        outbox.disconnect();
        assert!(outbox.target().is_none());
    }

    #[test]
    fn dropped_target_is_not_connected() {
        let mut outbox = StandardPortOutbox::new();
        {
            let gone = port("gone");
            outbox.connect(PortLink::to(&gone).unwrap());
            assert!(outbox.is_connected());
        }
        assert!(outbox.target().is_some());
        assert!(!outbox.is_connected());
    }

    #[test]
    fn disconnect_from_ignores_other_targets() {
        let a = port("a");
        let b = port("b");
        let mut outbox = StandardPortOutbox::new();
        outbox.connect(PortLink::to(&a).unwrap());

        assert!(!outbox.disconnect_from(&PortLink::to(&b).unwrap()));
        assert!(outbox.is_connected());
        assert!(outbox.disconnect_from(&PortLink::to(&a).unwrap()));
        assert!(!outbox.is_connected());
    }
}
