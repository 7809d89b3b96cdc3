use std::any::TypeId;

use crate::bootstrap::BootstrapContext;
use crate::event::registry::EventListenerRegistry;

/// Bootstrap-time factory producing one instance of a named service
/// capability for a persistence unit. Initiators are stateless and may be
/// shared across unit bootstraps; each call must hand back a fresh,
/// independently usable service.
pub trait ServiceInitiator: Send + Sync {
    type Service: 'static;

    /// Marker identifying which service capability this initiator provides
    fn service_initiated(&self) -> TypeId;

    fn initiate_service(&self, ctx: &BootstrapContext) -> Self::Service;
}

/// Initiator for the [`EventListenerRegistry`] capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventListenerRegistryInitiator;

pub static INSTANCE: EventListenerRegistryInitiator = EventListenerRegistryInitiator;

impl ServiceInitiator for EventListenerRegistryInitiator {
    type Service = EventListenerRegistry;

    fn service_initiated(&self) -> TypeId {
        TypeId::of::<EventListenerRegistry>()
    }

    fn initiate_service(&self, ctx: &BootstrapContext) -> EventListenerRegistry {
        tracing::debug!(unit = %ctx.unit_name, "initiating event listener registry");
        EventListenerRegistry::new()
    }
}
