// Driver-facing capabilities consumed by the type-descriptor layer.
// The statement/connection pool itself lives outside this crate; these traits
// are the narrow contract it is expected to satisfy.

pub mod postgres;
pub mod stream;

pub use stream::*;

use crate::error::DriverError;

/// Driver-native large character value (the CLOB-equivalent representation
/// the driver understands directly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeText(String);

impl LargeText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Character length, as the driver would report it
    pub fn char_length(&self) -> u64 {
        self.0.chars().count() as u64
    }
}

impl From<String> for LargeText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Positional parameter sink of a prepared statement. Indexes are 1-based,
/// matching how drivers number statement placeholders.
pub trait ParameterBinder {
    fn set_str(&mut self, index: usize, value: &str) -> Result<(), DriverError>;

    fn set_large_text(&mut self, index: usize, value: LargeText) -> Result<(), DriverError>;

    fn set_character_stream(
        &mut self,
        index: usize,
        stream: CharacterStream,
    ) -> Result<(), DriverError>;

    fn set_null(&mut self, index: usize, sql_type: i32) -> Result<(), DriverError>;
}

/// Named column access on one row of a result set. NULL columns surface as
/// `None`, never as an error.
pub trait RowAccess {
    fn get_str(&self, column: &str) -> Result<Option<String>, DriverError>;

    fn get_large_text(&self, column: &str) -> Result<Option<LargeText>, DriverError>;
}
