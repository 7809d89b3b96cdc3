//! Persistence-unit bootstrap.
//!
//! Services are constructed and held directly: the bootstrap routine calls
//! each initiator itself and hands the results to whoever needs them, instead
//! of resolving them through a keyed service lookup.

use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::event::dispatch::EventDispatcher;
use crate::event::error::EventError;
use crate::event::registry::EventListenerRegistry;
use crate::event::service::{ServiceInitiator, INSTANCE as EVENT_LISTENER_INITIATOR};
use crate::types::BindOptions;

/// What the container contract hands an initiator: the unit being built and
/// its resolved configuration.
#[derive(Debug, Clone)]
pub struct BootstrapContext {
    pub unit_name: String,
    pub config: RuntimeConfig,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Persistence unit name must not be empty")]
    EmptyUnitName,

    #[error("Listener registration failed: {0}")]
    Listener(#[from] EventError),
}

/// One initialized persistence unit. Mutable while listeners are being
/// registered, then treated as read-only for its lifetime - the `&mut self`
/// registration methods make the single-writer phase explicit.
pub struct PersistenceUnit {
    name: String,
    options: BindOptions,
    listener_registry: EventListenerRegistry,
}

impl PersistenceUnit {
    pub fn build(name: impl Into<String>, config: &RuntimeConfig) -> Result<Self, BootstrapError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BootstrapError::EmptyUnitName);
        }

        let ctx = BootstrapContext {
            unit_name: name.clone(),
            config: config.clone(),
        };
        let listener_registry = EVENT_LISTENER_INITIATOR.initiate_service(&ctx);

        tracing::info!(unit = %name, "persistence unit initialized");

        Ok(Self {
            name,
            options: BindOptions::from_config(config),
            listener_registry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    pub fn listener_registry(&self) -> &EventListenerRegistry {
        &self.listener_registry
    }

    /// Registration-phase access to the registry. Call before any sessions
    /// run; the registry is not synchronized.
    pub fn listener_registry_mut(&mut self) -> &mut EventListenerRegistry {
        &mut self.listener_registry
    }

    /// Run a registration block against the registry.
    pub fn configure<F>(&mut self, f: F) -> Result<(), BootstrapError>
    where
        F: FnOnce(&mut EventListenerRegistry) -> Result<(), EventError>,
    {
        f(&mut self.listener_registry).map_err(BootstrapError::Listener)
    }

    pub fn dispatcher(&self) -> EventDispatcher<'_> {
        EventDispatcher::new(&self.listener_registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::types::EventType;
    use crate::testing::recording;

    #[test]
    fn rejects_empty_unit_name() {
        let config = RuntimeConfig::from_env();
        assert!(matches!(
            PersistenceUnit::build("", &config),
            Err(BootstrapError::EmptyUnitName)
        ));
    }

    #[test]
    fn configure_registers_listeners() {
        let config = RuntimeConfig::from_env();
        let mut unit = PersistenceUnit::build("main", &config).unwrap();

        unit.configure(|registry| {
            registry.append_listener(EventType::PostLoad, recording("hydrate"))
        })
        .unwrap();

        assert_eq!(unit.listener_registry().listener_group(EventType::PostLoad).len(), 1);
    }
}
