use std::fmt;

use serde::{Deserialize, Serialize};

/// Wiring state of a single port.
///
/// ```text
///   Unwired --initialize--> Disconnected <--disconnect-- Connected
///                               |                          ^
///                               +--------connect-----------+
/// ```
///
/// Nothing returns a port to `Unwired` once it has been initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortState {
    Unwired,
    Disconnected,
    Connected,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PortState::Unwired => "unwired",
            PortState::Disconnected => "disconnected",
            PortState::Connected => "connected",
        };
        f.write_str(name)
    }
}
