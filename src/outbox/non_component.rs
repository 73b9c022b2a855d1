use super::{OutboxKind, PortOutbox};

/// Outbox aimed at something that is not a port.
///
/// `H` is chosen by the embedding system: a callback, a channel sender, a
/// handle into some other subsystem. The outbox only stores it.
#[derive(Debug)]
pub struct NonComponentPortOutbox<H> {
    reference: Option<H>,
}

impl<H> Default for NonComponentPortOutbox<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> NonComponentPortOutbox<H> {
    pub fn new() -> Self {
        NonComponentPortOutbox { reference: None }
    }

    /// Store `reference`, replacing and returning any previous one.
    pub fn connect(&mut self, reference: H) -> Option<H> {
        self.reference.replace(reference)
    }

    pub fn reference(&self) -> Option<&H> {
        self.reference.as_ref()
    }
}

impl<H> PortOutbox for NonComponentPortOutbox<H> {
    fn kind(&self) -> OutboxKind {
        OutboxKind::NonComponent
    }

    fn is_connected(&self) -> bool {
        self.reference.is_some()
    }

    fn disconnect(&mut self) {
        self.reference = None;
    }
}
