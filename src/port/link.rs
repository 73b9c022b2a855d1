use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use serde::{Deserialize, Serialize};

use super::{InterfacePort, SharedPort};
use crate::error::{Result, WiringError};

/// Where a port lives: its owning component (if it has been added to one)
/// and its own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub port: String,
}

impl PortAddress {
    pub fn new(component: Option<String>, port: impl Into<String>) -> Self {
        Self {
            component,
            port: port.into(),
        }
    }
}

impl fmt::Display for PortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.component {
            Some(component) => write!(f, "{}.{}", component, self.port),
            None => f.write_str(&self.port),
        }
    }
}

/// Non-owning association from an outbox to an external port.
///
/// The link holds a `Weak` pointer, so the target's lifetime stays with its
/// own component. The address is captured when the link is made and is kept
/// even if the target is later dropped or its component renamed.
pub struct PortLink<H> {
    port: Weak<RwLock<InterfacePort<H>>>,
    address: PortAddress,
}

impl<H> PortLink<H> {
    /// Link to `port`, reading its address under a short read lock.
    pub fn to(port: &SharedPort<H>) -> Result<Self> {
        let address = port
            .read()
            .map_err(|_| WiringError::LockPoisoned("link"))?
            .address();
        Ok(Self {
            port: Arc::downgrade(port),
            address,
        })
    }

    pub fn address(&self) -> &PortAddress {
        &self.address
    }

    /// The target port, if it is still alive.
    pub fn upgrade(&self) -> Option<SharedPort<H>> {
        self.port.upgrade()
    }

    pub fn is_alive(&self) -> bool {
        self.port.strong_count() > 0
    }

    /// True if this link targets exactly `port`.
    pub fn points_to(&self, port: &SharedPort<H>) -> bool {
        std::ptr::eq(self.port.as_ptr(), Arc::as_ptr(port))
    }
}

impl<H> Clone for PortLink<H> {
    fn clone(&self) -> Self {
        Self {
            port: Weak::clone(&self.port),
            address: self.address.clone(),
        }
    }
}

impl<H> PartialEq for PortLink<H> {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.port, &other.port)
    }
}

impl<H> Eq for PortLink<H> {}

impl<H> fmt::Debug for PortLink<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortLink")
            .field("address", &self.address)
            .field("alive", &self.is_alive())
            .finish()
    }
}
