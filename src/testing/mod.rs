//! Test support: in-memory driver capabilities and canned listeners.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::driver::{CharacterStream, LargeText, ParameterBinder, RowAccess};
use crate::error::DriverError;
use crate::event::{EventContext, EventError, EventListener, EventType};

/// What a statement parameter ended up bound as.
#[derive(Debug)]
pub enum BoundParam {
    Str(String),
    LargeText(LargeText),
    CharacterStream {
        content: String,
        length: Option<u64>,
    },
    Null {
        sql_type: i32,
    },
}

/// In-memory prepared statement capturing bound parameters by index.
/// Character streams are drained at bind time so tests can assert on content.
#[derive(Debug, Default)]
pub struct MockStatement {
    bound: BTreeMap<usize, BoundParam>,
}

impl MockStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(&self, index: usize) -> Option<&BoundParam> {
        self.bound.get(&index)
    }

    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }
}

impl ParameterBinder for MockStatement {
    fn set_str(&mut self, index: usize, value: &str) -> Result<(), DriverError> {
        self.bound.insert(index, BoundParam::Str(value.to_owned()));
        Ok(())
    }

    fn set_large_text(&mut self, index: usize, value: LargeText) -> Result<(), DriverError> {
        self.bound.insert(index, BoundParam::LargeText(value));
        Ok(())
    }

    fn set_character_stream(
        &mut self,
        index: usize,
        stream: CharacterStream,
    ) -> Result<(), DriverError> {
        let length = stream.length();
        let content = stream.read_into_string()?;
        self.bound
            .insert(index, BoundParam::CharacterStream { content, length });
        Ok(())
    }

    fn set_null(&mut self, index: usize, sql_type: i32) -> Result<(), DriverError> {
        self.bound.insert(index, BoundParam::Null { sql_type });
        Ok(())
    }
}

/// Single row backed by a column map. Missing columns error, NULL columns
/// return `None`, matching the driver contract.
#[derive(Debug, Default)]
pub struct MockRow {
    columns: HashMap<String, Option<String>>,
}

impl MockRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, column: &str, value: &str) -> Self {
        self.columns
            .insert(column.to_owned(), Some(value.to_owned()));
        self
    }

    pub fn with_null(mut self, column: &str) -> Self {
        self.columns.insert(column.to_owned(), None);
        self
    }
}

impl RowAccess for MockRow {
    fn get_str(&self, column: &str) -> Result<Option<String>, DriverError> {
        self.columns
            .get(column)
            .cloned()
            .ok_or_else(|| DriverError::NoSuchColumn(column.to_owned()))
    }

    fn get_large_text(&self, column: &str) -> Result<Option<LargeText>, DriverError> {
        Ok(self.get_str(column)?.map(LargeText::new))
    }
}

/// Listener that records every invocation it receives.
pub struct RecordingListener {
    name: &'static str,
    only_entity: Option<&'static str>,
    invocations: Mutex<Vec<EventType>>,
}

impl RecordingListener {
    pub fn invocations(&self) -> Vec<EventType> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventListener for RecordingListener {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, entity_name: &str) -> bool {
        self.only_entity.map_or(true, |only| only == entity_name)
    }

    async fn on_event(
        &self,
        event_type: EventType,
        _ctx: &mut EventContext,
    ) -> Result<(), EventError> {
        self.invocations.lock().unwrap().push(event_type);
        Ok(())
    }
}

/// Listener that always fails with a validation error.
pub struct FailingListener {
    name: &'static str,
}

#[async_trait]
impl EventListener for FailingListener {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn on_event(
        &self,
        event_type: EventType,
        _ctx: &mut EventContext,
    ) -> Result<(), EventError> {
        Err(EventError::ListenerFailed {
            listener: self.name,
            event_type,
            message: "always fails".to_string(),
        })
    }
}

pub fn recording(name: &'static str) -> Arc<RecordingListener> {
    Arc::new(RecordingListener {
        name,
        only_entity: None,
        invocations: Mutex::new(Vec::new()),
    })
}

pub fn recording_for_entity(name: &'static str, entity: &'static str) -> Arc<RecordingListener> {
    Arc::new(RecordingListener {
        name,
        only_entity: Some(entity),
        invocations: Mutex::new(Vec::new()),
    })
}

pub fn failing(name: &'static str) -> Arc<FailingListener> {
    Arc::new(FailingListener { name })
}
