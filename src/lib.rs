//! Component-and-connector base types.
//!
//! Components expose named ports; each port routes its outbound associations
//! through one outbox strategy:
//!
//! - [`StandardPortOutbox`]: exactly one external port
//! - [`BroadcastPortOutbox`]: a set of external ports
//! - [`NonComponentPortOutbox`]: one reference of the embedding system's
//!   handle type `H`
//!
//! Wiring is two-phase. Values are constructed inert and must be initialized
//! before any connect or disconnect call.
//!
//! ```
//! use component_interface::{
//!     impl_component, ComponentCore, ComponentInterface, InterfacePort, OutboxKind, PortState,
//!     Result,
//! };
//!
//! #[derive(Default)]
//! struct Thermometer {
//!     core: ComponentCore<()>,
//! }
//!
//! impl Thermometer {
//!     fn setup(&mut self) -> Result<()> {
//!         self.core.set_id("thermometer")?;
//!         self.core.add_port(InterfacePort::initialized("reading", OutboxKind::Standard))?;
//!         Ok(())
//!     }
//! }
//!
//! impl_component!(Thermometer, (), core, setup);
//!
//! let mut thermometer = Thermometer::default();
//! thermometer.initialize()?;
//!
//! let display = InterfacePort::initialized("input", OutboxKind::Standard).into_shared();
//! thermometer.connect_to_port(&display, "reading")?;
//!
//! let reading = thermometer.port("reading").unwrap();
//! assert_eq!(reading.read().unwrap().state(), PortState::Connected);
//!
//! thermometer.disconnect_port("reading")?;
//! assert!(reading.read().unwrap().outbox().is_none());
//! # Ok::<(), component_interface::WiringError>(())
//! ```

pub mod component;
mod error;
pub mod outbox;
pub mod port;
pub mod snapshot;

pub use component::{ComponentConfig, ComponentCore, ComponentInterface, LookupPolicy, PortSet};
pub use error::{Result, WiringError};
pub use outbox::{
    BroadcastPortOutbox, NonComponentPortOutbox, Outbox, OutboxKind, PortOutbox,
    StandardPortOutbox,
};
pub use port::{InterfacePort, PortAddress, PortLink, PortState, SharedPort};
pub use snapshot::{ComponentSnapshot, PortSnapshot};
