//! Serializable views of component wiring.
//!
//! A snapshot is a point-in-time description, not a way to restore state:
//! links are non-owning, so only the target addresses are recorded.

use serde::{Deserialize, Serialize};

use crate::component::ComponentCore;
use crate::error::{Result, WiringError};
use crate::outbox::{OutboxKind, PortOutbox};
use crate::port::{InterfacePort, PortAddress, PortState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSnapshot {
    pub id: String,
    pub kind: Option<OutboxKind>,
    pub state: PortState,
    /// Addresses of linked ports, in connection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<PortAddress>,
    /// Whether a non-component reference is attached.
    #[serde(default)]
    pub has_reference: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    pub id: String,
    pub ports: Vec<PortSnapshot>,
}

impl ComponentSnapshot {
    pub fn port(&self, id: &str) -> Option<&PortSnapshot> {
        self.ports.iter().find(|port| port.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<H> InterfacePort<H> {
    pub fn snapshot(&self) -> PortSnapshot {
        let outbox = self.outbox();
        PortSnapshot {
            id: self.id().to_string(),
            kind: self.kind(),
            state: self.state(),
            targets: outbox.map(|o| o.target_addresses()).unwrap_or_default(),
            has_reference: outbox
                .and_then(|o| o.as_non_component())
                .is_some_and(|o| o.is_connected()),
        }
    }
}

impl<H> ComponentCore<H> {
    pub fn snapshot(&self) -> Result<ComponentSnapshot> {
        let mut ports = Vec::with_capacity(self.ports().len());
        for port in self.ports().iter() {
            let port = port
                .read()
                .map_err(|_| WiringError::LockPoisoned("snapshot"))?;
            ports.push(port.snapshot());
        }
        Ok(ComponentSnapshot {
            id: self.id().to_string(),
            ports,
        })
    }
}
