use thiserror::Error;

use crate::outbox::OutboxKind;

/// Errors raised while wiring components, ports, and outboxes.
#[derive(Debug, Error)]
pub enum WiringError {
    /// The base component does not route this operation; implementers must
    /// override it.
    #[error("operation '{operation}' is not implemented for component '{component}'")]
    NotImplemented {
        operation: &'static str,
        component: String,
    },

    /// A connection call reached a port that was never initialized.
    #[error("port '{port}' has not been initialized")]
    PortNotInitialized { port: String },

    #[error("port '{port}' is already initialized")]
    AlreadyInitialized { port: String },

    /// The port's outbox kind cannot carry the requested operation.
    #[error("port '{port}' has a {kind} outbox, which does not support {operation}")]
    OutboxMismatch {
        port: String,
        operation: &'static str,
        kind: OutboxKind,
    },

    #[error("component '{component}' has no port '{port}'")]
    UnknownPort { component: String, port: String },

    #[error("component '{component}' already has a port '{port}'")]
    DuplicatePort { component: String, port: String },

    #[error("port lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WiringError>;
