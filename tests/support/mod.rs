#![allow(dead_code)]

pub mod components;

use std::sync::{Arc, Mutex};

use component_interface::ComponentInterface;

pub use components::{Display, Sensor};

/// Non-component targets of the test system.
#[derive(Debug, Clone)]
pub enum Sink {
    Stdout,
    Buffer(Arc<Mutex<Vec<String>>>),
}

impl Sink {
    pub fn buffer() -> Self {
        Sink::Buffer(Arc::new(Mutex::new(Vec::new())))
    }
}

/// Build a component and run its initialize step.
pub fn initialized<C: ComponentInterface<Sink> + Default>() -> C {
    let mut component = C::default();
    component.initialize().unwrap();
    component
}

/// Route tracing output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
