use serde::{Deserialize, Serialize};

/// Persistence lifecycle events keyed by the listener registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum EventType {
    PreInsert = 0,
    PostInsert = 1,
    PreUpdate = 2,
    PostUpdate = 3,
    PreDelete = 4,
    PostDelete = 5,
    PreLoad = 6,
    PostLoad = 7,
    Flush = 8,
    DirtyCheck = 9,
}

impl EventType {
    pub const ALL: [EventType; 10] = [
        EventType::PreInsert,
        EventType::PostInsert,
        EventType::PreUpdate,
        EventType::PostUpdate,
        EventType::PreDelete,
        EventType::PostDelete,
        EventType::PreLoad,
        EventType::PostLoad,
        EventType::Flush,
        EventType::DirtyCheck,
    ];

    pub const COUNT: usize = EventType::ALL.len();

    /// Stable position of this event type in the registry's group table
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check if the event fires before the row is touched. A listener failure
    /// here vetoes the operation; after the row changed it can only be
    /// reported.
    pub fn is_pre_event(&self) -> bool {
        matches!(
            self,
            EventType::PreInsert
                | EventType::PreUpdate
                | EventType::PreDelete
                | EventType::PreLoad
                | EventType::Flush
                | EventType::DirtyCheck
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_are_dense_and_stable() {
        for (position, event_type) in EventType::ALL.iter().enumerate() {
            assert_eq!(event_type.index(), position);
        }
    }

    #[test]
    fn post_events_are_not_vetoable() {
        assert!(EventType::PreInsert.is_pre_event());
        assert!(!EventType::PostInsert.is_pre_event());
        assert!(!EventType::PostLoad.is_pre_event());
    }
}
