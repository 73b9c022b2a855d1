//! Components and the ports they own.
//!
//! ```text
//!   ComponentInterface (trait)
//!        │ core()
//!        ▼
//!   ComponentCore ── id, ComponentConfig
//!        │
//!        ▼
//!   PortSet ── SharedPort ── InterfacePort ── Outbox
//! ```

mod component_core;
mod component_interface;
mod config;
mod port_set;

pub use component_core::ComponentCore;
pub use component_interface::ComponentInterface;
pub use config::{ComponentConfig, LookupPolicy};
pub use port_set::PortSet;
