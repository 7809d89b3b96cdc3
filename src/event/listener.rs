use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::event::error::EventError;
use crate::event::types::EventType;

/// Mutable state flowing through one lifecycle event dispatch.
pub struct EventContext {
    pub entity_name: String,
    pub id: Option<Uuid>,
    pub state: Map<String, Value>,
    pub occurred_at: DateTime<Utc>,

    // Type-safe metadata storage for cross-listener communication
    metadata: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl EventContext {
    pub fn new(entity_name: impl Into<String>, id: Option<Uuid>, state: Map<String, Value>) -> Self {
        Self {
            entity_name: entity_name.into(),
            id,
            state,
            occurred_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        self.state.insert(key.into(), value);
    }

    /// Store typed metadata - compile-time type safety
    pub fn set_metadata<T: Send + 'static>(&mut self, data: T) {
        self.metadata.insert(TypeId::of::<T>(), Box::new(data));
    }

    /// Retrieve typed metadata - compile-time type safety
    pub fn get_metadata<T: Send + 'static>(&self) -> Option<&T> {
        self.metadata
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    pub fn has_metadata<T: Send + 'static>(&self) -> bool {
        self.metadata.contains_key(&TypeId::of::<T>())
    }
}

impl fmt::Debug for EventContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventContext")
            .field("entity_name", &self.entity_name)
            .field("id", &self.id)
            .field("state", &self.state)
            .field("occurred_at", &self.occurred_at)
            .finish_non_exhaustive()
    }
}

/// A lifecycle listener. `name` doubles as the identity used for duplicate
/// suppression when the same listener is registered twice.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Listener name for logging, debugging and duplicate matching
    fn name(&self) -> &'static str;

    /// Check if the listener applies to this entity
    fn applies_to(&self, _entity_name: &str) -> bool {
        true
    }

    async fn on_event(
        &self,
        event_type: EventType,
        ctx: &mut EventContext,
    ) -> Result<(), EventError>;
}
