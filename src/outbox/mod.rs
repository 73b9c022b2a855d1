//! Outbox strategies.
//!
//! A port routes its outbound associations through exactly one outbox. The
//! strategy decides the fan-out:
//!
//! ```text
//!   StandardPortOutbox      one port        connect overwrites
//!   BroadcastPortOutbox     many ports      connect adds, no duplicates
//!   NonComponentPortOutbox  one handle `H`  connect overwrites
//! ```
//!
//! [`Outbox`] is the closed union the port actually owns; all three share the
//! [`PortOutbox`] capability.

mod broadcast;
mod non_component;
mod outbox;
mod port_outbox;
mod standard;

pub use broadcast::BroadcastPortOutbox;
pub use non_component::NonComponentPortOutbox;
pub use outbox::Outbox;
pub use port_outbox::{OutboxKind, PortOutbox};
pub use standard::StandardPortOutbox;
