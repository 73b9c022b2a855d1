use super::ComponentCore;
use crate::error::Result;
use crate::port::SharedPort;
use crate::snapshot::ComponentSnapshot;

/// A named unit exposing ports for external wiring.
///
/// Implementers embed a [`ComponentCore`] and expose it through `core` and
/// `core_mut`; [`impl_component!`](crate::impl_component) writes those for
/// you. Construction yields an inert value and `initialize` must run before
/// any connection call: it assigns the identifier and adds the ports.
///
/// `connect_non_component` and `disconnect_from_port` fail with
/// [`WiringError::NotImplemented`](crate::WiringError::NotImplemented) until a
/// component overrides them, usually by forwarding to
/// [`ComponentCore::route_non_component`] and
/// [`ComponentCore::route_disconnect_from`].
pub trait ComponentInterface<H> {
    fn core(&self) -> &ComponentCore<H>;
    fn core_mut(&mut self) -> &mut ComponentCore<H>;

    /// Assign the identifier and populate the ports.
    fn initialize(&mut self) -> Result<()>;

    fn id<'a>(&'a self) -> &'a str
    where
        H: 'a,
    {
        self.core().id()
    }

    fn port(&self, id: &str) -> Option<SharedPort<H>> {
        self.core().port(id)
    }

    fn connect_to_port(&self, external: &SharedPort<H>, port_id: &str) -> Result<()> {
        self.core().connect_to_port(external, port_id)
    }

    /// General entry point for components that know where `external` belongs.
    /// Does nothing unless overridden.
    fn connect(&self, _external: &SharedPort<H>) -> Result<()> {
        Ok(())
    }

    fn connect_non_component(&self, _reference: H, _port_id: &str) -> Result<()> {
        Err(self.core().not_implemented("connect_non_component"))
    }

    fn disconnect_from_port(&self, _external: &SharedPort<H>, _port_id: &str) -> Result<()> {
        Err(self.core().not_implemented("disconnect_from_port"))
    }

    fn disconnect_port(&self, port_id: &str) -> Result<()> {
        self.core().disconnect_port(port_id)
    }

    fn snapshot(&self) -> Result<ComponentSnapshot> {
        self.core().snapshot()
    }
}

/// Implement [`ComponentInterface`] for a struct embedding a
/// [`ComponentCore`], delegating `initialize` to an inherent method.
///
/// ```
/// use component_interface::{impl_component, ComponentCore, InterfacePort, OutboxKind, Result};
///
/// #[derive(Default)]
/// struct Clock {
///     core: ComponentCore<()>,
/// }
///
/// impl Clock {
///     fn setup(&mut self) -> Result<()> {
///         self.core.set_id("clock")?;
///         self.core.add_port(InterfacePort::initialized("tick", OutboxKind::Broadcast))?;
///         Ok(())
///     }
/// }
///
/// impl_component!(Clock, (), core, setup);
/// ```
#[macro_export]
macro_rules! impl_component {
    ($ty:ty, $handle:ty, $core:ident, $init:ident) => {
        impl $crate::ComponentInterface<$handle> for $ty {
            fn core(&self) -> &$crate::ComponentCore<$handle> {
                &self.$core
            }

            fn core_mut(&mut self) -> &mut $crate::ComponentCore<$handle> {
                &mut self.$core
            }

            fn initialize(&mut self) -> $crate::Result<()> {
                Self::$init(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WiringError;
    use crate::outbox::OutboxKind;
    use crate::port::{InterfacePort, PortState};

    #[derive(Default)]
    struct Bare {
        core: ComponentCore<u8>,
    }

    impl Bare {
        fn setup(&mut self) -> Result<()> {
            self.core.set_id("bare")?;
            self.core
                .add_port(InterfacePort::initialized("p1", OutboxKind::Standard))?;
            self.core
                .add_port(InterfacePort::initialized("p2", OutboxKind::NonComponent))?;
            Ok(())
        }
    }

    crate::impl_component!(Bare, u8, core, setup);

    fn bare() -> Bare {
        let mut component = Bare::default();
        component.initialize().unwrap();
        component
    }

    #[test]
    fn base_connect_non_component_is_not_implemented() {
        let component = bare();
        let err = component.connect_non_component(1, "p2").unwrap_err();
        assert!(matches!(
            err,
            WiringError::NotImplemented { operation: "connect_non_component", .. }
        ));
    }

    #[test]
    fn base_disconnect_from_port_is_not_implemented() {
        let component = bare();
        let external = InterfacePort::initialized("x", OutboxKind::Standard).into_shared();
        let err = component.disconnect_from_port(&external, "p1").unwrap_err();
        assert!(matches!(
            err,
            WiringError::NotImplemented { operation: "disconnect_from_port", .. }
        ));
    }

    #[test]
    fn base_connect_is_a_noop() {
        let component = bare();
        let external = InterfacePort::initialized("x", OutboxKind::Standard).into_shared();
        component.connect(&external).unwrap();
        let p1 = component.port("p1").unwrap();
        assert_eq!(p1.read().unwrap().state(), PortState::Disconnected);
    }

    #[test]
    fn port_lookup_never_fails() {
        let component = bare();
        assert_eq!(component.id(), "bare");
        assert!(component.port("p1").is_some());
        assert!(component.port("missing").is_none());
    }
}
