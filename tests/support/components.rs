use component_interface::{
    impl_component, ComponentConfig, ComponentCore, ComponentInterface, InterfacePort,
    OutboxKind, Result, SharedPort,
};

use super::Sink;

/// Emits readings on `out`, alerts on `alerts`, and log lines to a `Sink`
/// on `log`. Overrides every routing hook.
#[derive(Default)]
pub struct Sensor {
    core: ComponentCore<Sink>,
}

impl Sensor {
    pub fn with_config(config: ComponentConfig) -> Self {
        Sensor {
            core: ComponentCore::with_config(config),
        }
    }
}

impl ComponentInterface<Sink> for Sensor {
    fn core(&self) -> &ComponentCore<Sink> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore<Sink> {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.core.set_id("sensor")?;

        let mut out = InterfacePort::new();
        out.initialize("out", OutboxKind::Standard)?;
        self.core.add_port(out)?;

        self.core
            .add_port(InterfacePort::initialized("alerts", OutboxKind::Broadcast))?;
        self.core
            .add_port(InterfacePort::initialized("log", OutboxKind::NonComponent))?;
        Ok(())
    }

    fn connect(&self, external: &SharedPort<Sink>) -> Result<()> {
        self.core.connect_to_port(external, "out")
    }

    fn connect_non_component(&self, reference: Sink, port_id: &str) -> Result<()> {
        self.core.route_non_component(reference, port_id)
    }

    fn disconnect_from_port(&self, external: &SharedPort<Sink>, port_id: &str) -> Result<()> {
        self.core.route_disconnect_from(external, port_id)
    }
}

/// Receives readings on `in`.
#[derive(Default)]
pub struct Display {
    core: ComponentCore<Sink>,
}

impl Display {
    fn setup(&mut self) -> Result<()> {
        self.core.set_id("display")?;
        self.core
            .add_port(InterfacePort::initialized("in", OutboxKind::Standard))?;
        Ok(())
    }
}

impl_component!(Display, Sink, core, setup);

/// Two standard ports and no overrides.
#[derive(Default)]
pub struct Bare {
    core: ComponentCore<Sink>,
}

impl Bare {
    fn setup(&mut self) -> Result<()> {
        self.core.set_id("bare")?;
        self.core
            .add_port(InterfacePort::initialized("p1", OutboxKind::Standard))?;
        self.core
            .add_port(InterfacePort::initialized("p2", OutboxKind::Standard))?;
        Ok(())
    }
}

impl_component!(Bare, Sink, core, setup);
