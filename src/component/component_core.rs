use super::{ComponentConfig, LookupPolicy, PortSet};
use crate::error::{Result, WiringError};
use crate::port::{InterfacePort, PortLink, SharedPort};

/// State every component embeds: its identifier, its ports, and its wiring
/// settings.
///
/// Routing helpers live here so that components overriding a
/// [`ComponentInterface`](super::ComponentInterface) method can reuse the
/// standard lookup-and-delegate behavior in one call.
#[derive(Debug)]
pub struct ComponentCore<H> {
    id: String,
    ports: PortSet<H>,
    config: ComponentConfig,
}

impl<H> Default for ComponentCore<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ComponentCore<H> {
    /// An inert core: no identifier, no ports, default settings.
    pub fn new() -> Self {
        Self::with_config(ComponentConfig::default())
    }

    pub fn with_config(config: ComponentConfig) -> Self {
        ComponentCore {
            id: String::new(),
            ports: PortSet::new(),
            config,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Assign the identifier and re-stamp ports already added.
    ///
    /// Links other components already hold to these ports keep the address
    /// they recorded when they connected; only later connections see the
    /// new identifier.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        self.id = id.into();
        self.ports.set_owner(&self.id)
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn set_lookup_policy(&mut self, lookup: LookupPolicy) {
        self.config.lookup = lookup;
    }

    pub fn ports(&self) -> &PortSet<H> {
        &self.ports
    }

    /// Take ownership of an initialized port.
    pub fn add_port(&mut self, port: InterfacePort<H>) -> Result<SharedPort<H>> {
        let port = self.ports.insert(&self.id, port)?;
        tracing::trace!(component = %self.id, ports = self.ports.len(), "port added");
        Ok(port)
    }

    /// Look up a port by identifier. A miss is never an error here.
    pub fn port(&self, id: &str) -> Option<SharedPort<H>> {
        self.ports.get(id)
    }

    /// Look up a port on behalf of `operation`, applying the lookup policy.
    ///
    /// `Ok(None)` means the miss was ignored and the caller should do nothing.
    pub fn resolve(&self, port_id: &str, operation: &'static str) -> Result<Option<SharedPort<H>>> {
        if let Some(port) = self.ports.get(port_id) {
            return Ok(Some(port));
        }
        match self.config.lookup {
            LookupPolicy::Ignore => {
                tracing::debug!(
                    component = %self.id,
                    port = port_id,
                    operation,
                    "unknown port, call ignored"
                );
                Ok(None)
            }
            LookupPolicy::Reject => Err(WiringError::UnknownPort {
                component: self.id.clone(),
                port: port_id.to_string(),
            }),
        }
    }

    /// Connect the named port to `external`.
    pub fn connect_to_port(&self, external: &SharedPort<H>, port_id: &str) -> Result<()> {
        let Some(port) = self.resolve(port_id, "connect_to_port")? else {
            return Ok(());
        };
        // Read the target's address before write-locking our own port, which
        // may be the same port.
        let link = PortLink::to(external)?;
        let mut port = port
            .write()
            .map_err(|_| WiringError::LockPoisoned("connect_to_port"))?;
        port.connect(link)
    }

    /// Drop the named port's outbox.
    pub fn disconnect_port(&self, port_id: &str) -> Result<()> {
        let Some(port) = self.resolve(port_id, "disconnect_port")? else {
            return Ok(());
        };
        let mut port = port
            .write()
            .map_err(|_| WiringError::LockPoisoned("disconnect_port"))?;
        port.disconnect();
        Ok(())
    }

    /// Hand `reference` to the named port's non-component outbox.
    pub fn route_non_component(&self, reference: H, port_id: &str) -> Result<()> {
        let Some(port) = self.resolve(port_id, "connect_non_component")? else {
            return Ok(());
        };
        let mut port = port
            .write()
            .map_err(|_| WiringError::LockPoisoned("connect_non_component"))?;
        port.connect_non_component(reference)
    }

    /// Remove `external` from the named port's outbox, keeping other targets.
    pub fn route_disconnect_from(&self, external: &SharedPort<H>, port_id: &str) -> Result<()> {
        let Some(port) = self.resolve(port_id, "disconnect_from_port")? else {
            return Ok(());
        };
        let link = PortLink::to(external)?;
        let mut port = port
            .write()
            .map_err(|_| WiringError::LockPoisoned("disconnect_from_port"))?;
        port.disconnect_from(&link)
    }

    pub fn not_implemented(&self, operation: &'static str) -> WiringError {
        WiringError::NotImplemented {
            operation,
            component: self.id.clone(),
        }
    }
}
