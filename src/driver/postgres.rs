//! sqlx-backed realization of the driver capabilities for Postgres.
//!
//! sqlx binds parameters by chaining `bind` calls rather than by mutating a
//! statement in place, so the positional contract is satisfied with a buffer:
//! parameters accumulate by index and are replayed onto the query in order.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};

use crate::driver::{CharacterStream, LargeText, ParameterBinder, RowAccess};
use crate::error::DriverError;

/// Buffered positional parameters for one statement execution.
///
/// Postgres has no separate large-object protocol path for TEXT columns, so
/// every character-typed parameter lands as TEXT; character streams are
/// drained at bind time. Unset indexes replay as NULL.
#[derive(Debug, Default)]
pub struct PgParameterBuffer {
    params: Vec<Option<String>>,
}

impl PgParameterBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Replay the buffered parameters onto a query in index order.
    pub fn apply<'q>(
        &'q self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        self.params.iter().fold(query, |q, p| match p {
            Some(s) => q.bind(s.as_str()),
            None => q.bind(Option::<String>::None),
        })
    }

    fn put(&mut self, index: usize, value: Option<String>) -> Result<(), DriverError> {
        if index == 0 {
            return Err(DriverError::ParameterOutOfRange(index));
        }
        if self.params.len() < index {
            self.params.resize(index, None);
        }
        self.params[index - 1] = value;
        Ok(())
    }
}

impl ParameterBinder for PgParameterBuffer {
    fn set_str(&mut self, index: usize, value: &str) -> Result<(), DriverError> {
        self.put(index, Some(value.to_owned()))
    }

    fn set_large_text(&mut self, index: usize, value: LargeText) -> Result<(), DriverError> {
        self.put(index, Some(value.into_string()))
    }

    fn set_character_stream(
        &mut self,
        index: usize,
        stream: CharacterStream,
    ) -> Result<(), DriverError> {
        let drained = stream.read_into_string()?;
        self.put(index, Some(drained))
    }

    fn set_null(&mut self, index: usize, _sql_type: i32) -> Result<(), DriverError> {
        self.put(index, None)
    }
}

impl RowAccess for PgRow {
    fn get_str(&self, column: &str) -> Result<Option<String>, DriverError> {
        Ok(self.try_get::<Option<String>, _>(column)?)
    }

    fn get_large_text(&self, column: &str) -> Result<Option<LargeText>, DriverError> {
        Ok(self
            .try_get::<Option<String>, _>(column)?
            .map(LargeText::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_parameters_in_index_order() {
        let mut buffer = PgParameterBuffer::new();
        buffer.set_str(2, "second").unwrap();
        buffer.set_str(1, "first").unwrap();
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn rejects_index_zero() {
        let mut buffer = PgParameterBuffer::new();
        let err = buffer.set_str(0, "nope").unwrap_err();
        assert!(matches!(err, DriverError::ParameterOutOfRange(0)));
    }

    #[test]
    fn drains_character_stream_at_bind_time() {
        let mut buffer = PgParameterBuffer::new();
        let stream = CharacterStream::from_string("clob body".to_string());
        buffer.set_character_stream(1, stream).unwrap();
        assert_eq!(buffer.params[0].as_deref(), Some("clob body"));
    }

    #[test]
    fn unset_indexes_are_null() {
        let mut buffer = PgParameterBuffer::new();
        buffer.set_str(3, "third").unwrap();
        assert_eq!(buffer.params[0], None);
        assert_eq!(buffer.params[1], None);
        assert_eq!(buffer.params[2].as_deref(), Some("third"));
    }
}
