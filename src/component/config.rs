use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a component does when a call names a port it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Skip the call. Wiring code stays safe against typos, at the cost of
    /// failing silently (a debug event is still recorded).
    #[default]
    Ignore,
    /// Fail with [`WiringError::UnknownPort`](crate::WiringError::UnknownPort).
    Reject,
}

/// Per-component wiring settings.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```
/// use component_interface::{ComponentConfig, LookupPolicy};
///
/// let config = ComponentConfig::from_json(r#"{ "lookup": "reject" }"#).unwrap();
/// assert_eq!(config.lookup, LookupPolicy::Reject);
///
/// let config = ComponentConfig::from_json("{}").unwrap();
/// assert_eq!(config.lookup, LookupPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    pub lookup: LookupPolicy,
}

impl ComponentConfig {
    /// Settings that turn every lookup miss into an error.
    pub fn strict() -> Self {
        ComponentConfig {
            lookup: LookupPolicy::Reject,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
