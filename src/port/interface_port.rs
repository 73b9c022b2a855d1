use std::sync::{Arc, RwLock};

use super::{PortAddress, PortLink, PortState};
use crate::error::{Result, WiringError};
use crate::outbox::{Outbox, OutboxKind, PortOutbox};

/// A port shared between its owning component and the outboxes linking to it.
pub type SharedPort<H> = Arc<RwLock<InterfacePort<H>>>;

/// A named connection point of a component.
///
/// A port is built inert by [`InterfacePort::new`] and only becomes usable
/// after [`InterfacePort::initialize`] has given it an identifier and an
/// outbox kind. Every connection call before that fails with
/// [`WiringError::PortNotInitialized`].
///
/// `disconnect` drops the owned outbox rather than resetting it. The declared
/// kind survives, so the next connect builds a fresh outbox of the same kind.
#[derive(Debug)]
pub struct InterfacePort<H> {
    id: String,
    owner: Option<String>,
    kind: Option<OutboxKind>,
    outbox: Option<Outbox<H>>,
}

impl<H> Default for InterfacePort<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> InterfacePort<H> {
    /// An unwired port with no identifier and no outbox.
    pub fn new() -> Self {
        InterfacePort {
            id: String::new(),
            owner: None,
            kind: None,
            outbox: None,
        }
    }

    /// Shorthand for `new` followed by a successful `initialize`.
    pub fn initialized(id: impl Into<String>, kind: OutboxKind) -> Self {
        let id = id.into();
        InterfacePort {
            outbox: Some(Outbox::new(kind)),
            id,
            owner: None,
            kind: Some(kind),
        }
    }

    /// Assign the identifier and build an empty outbox of `kind`.
    pub fn initialize(&mut self, id: impl Into<String>, kind: OutboxKind) -> Result<()> {
        if self.kind.is_some() {
            return Err(WiringError::AlreadyInitialized {
                port: self.id.clone(),
            });
        }
        self.id = id.into();
        self.kind = Some(kind);
        self.outbox = Some(Outbox::new(kind));
        tracing::debug!(port = %self.id, %kind, "port initialized");
        Ok(())
    }

    pub fn into_shared(self) -> SharedPort<H> {
        Arc::new(RwLock::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the component this port was added to.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub(crate) fn set_owner(&mut self, owner: &str) {
        self.owner = Some(owner.to_string());
    }

    pub fn address(&self) -> PortAddress {
        PortAddress::new(self.owner.clone(), self.id.clone())
    }

    /// The outbox kind chosen at initialization.
    pub fn kind(&self) -> Option<OutboxKind> {
        self.kind
    }

    pub fn outbox(&self) -> Option<&Outbox<H>> {
        self.outbox.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.kind.is_some()
    }

    pub fn state(&self) -> PortState {
        match (&self.kind, &self.outbox) {
            (None, _) => PortState::Unwired,
            (Some(_), Some(outbox)) if outbox.is_connected() => PortState::Connected,
            _ => PortState::Disconnected,
        }
    }

    /// Associate this port with an external port.
    ///
    /// A standard outbox replaces its target, a broadcast outbox adds one.
    pub fn connect(&mut self, target: PortLink<H>) -> Result<()> {
        let address = target.address().clone();
        let added = self.with_outbox(|port, outbox| match outbox {
            Outbox::Standard(outbox) => {
                outbox.connect(target);
                Ok(true)
            }
            Outbox::Broadcast(outbox) => Ok(outbox.connect(target)),
            Outbox::NonComponent(outbox) => Err(mismatch(port, "connect", outbox.kind())),
        })?;
        tracing::debug!(port = %self.id, target = %address, added, "port connected");
        Ok(())
    }

    /// Hand a non-port reference to a non-component outbox.
    pub fn connect_non_component(&mut self, reference: H) -> Result<()> {
        let replaced = self.with_outbox(|port, outbox| match outbox {
            Outbox::NonComponent(outbox) => Ok(outbox.connect(reference).is_some()),
            other => Err(mismatch(port, "connect_non_component", other.kind())),
        })?;
        tracing::debug!(port = %self.id, replaced, "port connected to non-component reference");
        Ok(())
    }

    /// Drop the association with `target` only, keeping any others.
    pub fn disconnect_from(&mut self, target: &PortLink<H>) -> Result<()> {
        let kind = self.declared_kind()?;
        let removed = match self.outbox.as_mut() {
            Some(Outbox::Standard(outbox)) => outbox.disconnect_from(target),
            Some(Outbox::Broadcast(outbox)) => outbox.disconnect_from(target),
            None if kind.targets_ports() => false,
            Some(Outbox::NonComponent(_)) | None => {
                return Err(mismatch(&self.id, "disconnect_from", kind));
            }
        };
        tracing::debug!(
            port = %self.id,
            %kind,
            target = %target.address(),
            removed,
            "port disconnected from target"
        );
        Ok(())
    }

    /// Drop the outbox and with it every outbound association.
    pub fn disconnect(&mut self) {
        if self.outbox.take().is_some() {
            tracing::debug!(port = %self.id, "port disconnected");
        }
    }

    fn declared_kind(&self) -> Result<OutboxKind> {
        self.kind.ok_or_else(|| WiringError::PortNotInitialized {
            port: self.id.clone(),
        })
    }

    /// Run `f` against the outbox, rebuilding a dropped one from the declared
    /// kind. A rebuilt outbox is only kept when `f` succeeds.
    fn with_outbox<T>(&mut self, f: impl FnOnce(&str, &mut Outbox<H>) -> Result<T>) -> Result<T> {
        let kind = self.declared_kind()?;
        let existed = self.outbox.is_some();
        let mut outbox = self.outbox.take().unwrap_or_else(|| Outbox::new(kind));
        let result = f(&self.id, &mut outbox);
        if existed || result.is_ok() {
            self.outbox = Some(outbox);
        }
        result
    }
}

fn mismatch(port: &str, operation: &'static str, kind: OutboxKind) -> WiringError {
    WiringError::OutboxMismatch {
        port: port.to_string(),
        operation,
        kind,
    }
}
