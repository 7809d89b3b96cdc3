use std::sync::Arc;

use crate::event::error::EventError;
use crate::event::listener::EventListener;
use crate::event::types::EventType;

/// How a newly registered listener that matches an already present one
/// (by name) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicationPolicy {
    /// Keep the first occurrence, in its original position
    #[default]
    KeepOriginal,
    /// Swap the new listener into the original's position
    ReplaceOriginal,
    /// Reject the registration
    Error,
}

/// Ordered listeners for one event type. Registration order is preserved;
/// duplicates are resolved by the group's duplication policy.
pub struct EventListenerGroup {
    event_type: EventType,
    duplication_policy: DuplicationPolicy,
    listeners: Vec<Arc<dyn EventListener>>,
}

impl EventListenerGroup {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            duplication_policy: DuplicationPolicy::default(),
            listeners: Vec::new(),
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn set_duplication_policy(&mut self, policy: DuplicationPolicy) {
        self.duplication_policy = policy;
    }

    pub fn listeners(&self) -> &[Arc<dyn EventListener>] {
        &self.listeners
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn append(&mut self, listener: Arc<dyn EventListener>) -> Result<(), EventError> {
        self.insert(listener, self.listeners.len())
    }

    pub fn prepend(&mut self, listener: Arc<dyn EventListener>) -> Result<(), EventError> {
        self.insert(listener, 0)
    }

    /// Discard the current chain and register the given listeners in order.
    pub fn replace_with(
        &mut self,
        listeners: Vec<Arc<dyn EventListener>>,
    ) -> Result<(), EventError> {
        self.listeners.clear();
        for listener in listeners {
            self.append(listener)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    fn insert(
        &mut self,
        listener: Arc<dyn EventListener>,
        position: usize,
    ) -> Result<(), EventError> {
        match self.position_of(listener.name()) {
            Some(existing) => match self.duplication_policy {
                DuplicationPolicy::KeepOriginal => {
                    tracing::debug!(
                        listener = listener.name(),
                        event_type = ?self.event_type,
                        "duplicate listener suppressed"
                    );
                    Ok(())
                }
                DuplicationPolicy::ReplaceOriginal => {
                    self.listeners[existing] = listener;
                    Ok(())
                }
                DuplicationPolicy::Error => Err(EventError::DuplicateListener {
                    listener: listener.name().to_string(),
                    event_type: self.event_type,
                }),
            },
            None => {
                tracing::debug!(
                    listener = listener.name(),
                    event_type = ?self.event_type,
                    "registered listener"
                );
                self.listeners.insert(position, listener);
                Ok(())
            }
        }
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.listeners.iter().position(|l| l.name() == name)
    }
}

/// Per-persistence-unit mapping from event type to its ordered listener
/// group. Every event type has a group from construction on, so lookups never
/// come back absent - an event type nobody registered for simply yields an
/// empty group and dispatch becomes a no-op.
///
/// Mutation is immediate and unsynchronized: the expected lifecycle is
/// single-threaded registration during bootstrap, then read-only concurrent
/// use. Mutating after sessions are running is caller misuse.
pub struct EventListenerRegistry {
    groups: [EventListenerGroup; EventType::COUNT],
}

impl EventListenerRegistry {
    pub fn new() -> Self {
        Self {
            groups: EventType::ALL.map(EventListenerGroup::new),
        }
    }

    pub fn listener_group(&self, event_type: EventType) -> &EventListenerGroup {
        &self.groups[event_type.index()]
    }

    pub fn listener_group_mut(&mut self, event_type: EventType) -> &mut EventListenerGroup {
        &mut self.groups[event_type.index()]
    }

    pub fn append_listener(
        &mut self,
        event_type: EventType,
        listener: Arc<dyn EventListener>,
    ) -> Result<(), EventError> {
        self.listener_group_mut(event_type).append(listener)
    }

    pub fn prepend_listener(
        &mut self,
        event_type: EventType,
        listener: Arc<dyn EventListener>,
    ) -> Result<(), EventError> {
        self.listener_group_mut(event_type).prepend(listener)
    }

    pub fn replace_listeners(
        &mut self,
        event_type: EventType,
        listeners: Vec<Arc<dyn EventListener>>,
    ) -> Result<(), EventError> {
        self.listener_group_mut(event_type).replace_with(listeners)
    }

    pub fn set_duplication_policy(&mut self, event_type: EventType, policy: DuplicationPolicy) {
        self.listener_group_mut(event_type)
            .set_duplication_policy(policy);
    }
}

impl Default for EventListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
