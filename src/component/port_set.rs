use std::sync::Arc;

use crate::error::{Result, WiringError};
use crate::port::{InterfacePort, SharedPort};

#[derive(Debug)]
struct PortEntry<H> {
    id: String,
    port: SharedPort<H>,
}

/// The ports a component owns, in insertion order.
///
/// Lookup is a linear scan over cached identifiers; components carry a
/// handful of ports. Identifiers are cached at insert, which is safe because
/// an initialized port can never be re-initialized under another id.
#[derive(Debug)]
pub struct PortSet<H> {
    entries: Vec<PortEntry<H>>,
}

impl<H> Default for PortSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> PortSet<H> {
    pub fn new() -> Self {
        PortSet {
            entries: Vec::new(),
        }
    }

    /// Take ownership of an initialized port and stamp it with `owner`.
    pub fn insert(&mut self, owner: &str, mut port: InterfacePort<H>) -> Result<SharedPort<H>> {
        if !port.is_initialized() {
            return Err(WiringError::PortNotInitialized {
                port: port.id().to_string(),
            });
        }
        if self.contains(port.id()) {
            return Err(WiringError::DuplicatePort {
                component: owner.to_string(),
                port: port.id().to_string(),
            });
        }
        if !owner.is_empty() {
            port.set_owner(owner);
        }
        let id = port.id().to_string();
        let port = port.into_shared();
        self.entries.push(PortEntry {
            id,
            port: Arc::clone(&port),
        });
        Ok(port)
    }

    pub fn get(&self, id: &str) -> Option<SharedPort<H>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| Arc::clone(&entry.port))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedPort<H>> {
        self.entries.iter().map(|entry| &entry.port)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-stamp every port after the owning component changed its id.
    pub(crate) fn set_owner(&self, owner: &str) -> Result<()> {
        for entry in &self.entries {
            entry
                .port
                .write()
                .map_err(|_| WiringError::LockPoisoned("set owner"))?
                .set_owner(owner);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbox::OutboxKind;

    #[test]
    fn insert_and_lookup() {
        let mut ports: PortSet<()> = PortSet::new();
        ports
            .insert("sensor", InterfacePort::initialized("p1", OutboxKind::Standard))
            .unwrap();
        ports
            .insert("sensor", InterfacePort::initialized("p2", OutboxKind::Broadcast))
            .unwrap();

        let p1 = ports.get("p1").unwrap();
        assert_eq!(p1.read().unwrap().id(), "p1");
        assert_eq!(p1.read().unwrap().owner(), Some("sensor"));
        assert!(ports.get("missing").is_none());
        assert_eq!(ports.ids().collect::<Vec<_>>(), vec!["p1", "p2"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ports: PortSet<()> = PortSet::new();
        ports
            .insert("sensor", InterfacePort::initialized("p1", OutboxKind::Standard))
            .unwrap();
        let err = ports
            .insert("sensor", InterfacePort::initialized("p1", OutboxKind::Broadcast))
            .unwrap_err();
        assert!(matches!(err, WiringError::DuplicatePort { .. }));
        assert_eq!(ports.len(), 1);
    }

    #[test]
    fn unwired_ports_are_rejected() {
        let mut ports: PortSet<()> = PortSet::new();
        let err = ports.insert("sensor", InterfacePort::new()).unwrap_err();
        assert!(matches!(err, WiringError::PortNotInitialized { .. }));
        assert!(ports.is_empty());
    }

    #[test]
    fn set_owner_restamps_existing_ports() {
        let mut ports: PortSet<()> = PortSet::new();
        let port = ports
            .insert("", InterfacePort::initialized("p1", OutboxKind::Standard))
            .unwrap();
        assert_eq!(port.read().unwrap().owner(), None);

        ports.set_owner("sensor").unwrap();
        assert_eq!(port.read().unwrap().address().to_string(), "sensor.p1");
    }
}
