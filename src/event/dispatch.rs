use std::time::Instant;

use crate::event::error::EventError;
use crate::event::listener::EventContext;
use crate::event::registry::EventListenerRegistry;
use crate::event::types::EventType;

/// Invokes the registered listener chain for one lifecycle event.
/// Holds no state of its own - all ordering lives in the registry.
pub struct EventDispatcher<'a> {
    registry: &'a EventListenerRegistry,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(registry: &'a EventListenerRegistry) -> Self {
        Self { registry }
    }

    /// Run every applicable listener for the event, in registration order.
    ///
    /// A failing listener on a pre-event vetoes the operation: dispatch stops
    /// and the error propagates. On a post-event the row change has already
    /// happened, so the remaining listeners still run and the first failure
    /// is returned afterwards.
    pub async fn dispatch(
        &self,
        event_type: EventType,
        ctx: &mut EventContext,
    ) -> Result<(), EventError> {
        let group = self.registry.listener_group(event_type);
        if group.is_empty() {
            tracing::trace!(?event_type, "no listeners registered");
            return Ok(());
        }

        tracing::debug!(
            ?event_type,
            entity = %ctx.entity_name,
            listeners = group.len(),
            "dispatching lifecycle event"
        );

        let mut first_failure: Option<EventError> = None;

        for listener in group.listeners() {
            if !listener.applies_to(&ctx.entity_name) {
                tracing::trace!(
                    listener = listener.name(),
                    entity = %ctx.entity_name,
                    "listener skipped - doesn't apply to entity"
                );
                continue;
            }

            let started = Instant::now();
            match listener.on_event(event_type, ctx).await {
                Ok(()) => {
                    tracing::debug!(
                        listener = listener.name(),
                        elapsed = ?started.elapsed(),
                        "listener completed"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        listener = listener.name(),
                        ?event_type,
                        %error,
                        "listener failed"
                    );
                    if event_type.is_pre_event() {
                        return Err(error);
                    }
                    first_failure.get_or_insert(error);
                }
            }
        }

        match first_failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
