//! Interface ports and the links between them.
//!
//! A port is owned by exactly one component and shared with the rest of the
//! system as a [`SharedPort`]. Outboxes of other ports refer to it through a
//! [`PortLink`], which never keeps it alive.

mod interface_port;
mod link;
mod state;

pub use interface_port::{InterfacePort, SharedPort};
pub use link::{PortAddress, PortLink};
pub use state::PortState;
