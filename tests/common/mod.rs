//! Shared driver stand-ins for integration tests. These model the statement
//! and result-set contracts the way an in-memory driver would satisfy them.

use std::collections::{BTreeMap, HashMap};

use rowcore::driver::{CharacterStream, LargeText, ParameterBinder, RowAccess};
use rowcore::error::DriverError;

#[derive(Debug)]
pub enum Bound {
    Str(String),
    LargeText(String),
    Stream { content: String, length: Option<u64> },
    Null(i32),
}

#[derive(Debug, Default)]
pub struct TestStatement {
    pub bound: BTreeMap<usize, Bound>,
}

impl TestStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text content the parameter would carry on the wire, however it was bound.
    pub fn text_at(&self, index: usize) -> Option<&str> {
        match self.bound.get(&index)? {
            Bound::Str(s) | Bound::LargeText(s) | Bound::Stream { content: s, .. } => Some(s),
            Bound::Null(_) => None,
        }
    }
}

impl ParameterBinder for TestStatement {
    fn set_str(&mut self, index: usize, value: &str) -> Result<(), DriverError> {
        self.bound.insert(index, Bound::Str(value.to_owned()));
        Ok(())
    }

    fn set_large_text(&mut self, index: usize, value: LargeText) -> Result<(), DriverError> {
        self.bound
            .insert(index, Bound::LargeText(value.into_string()));
        Ok(())
    }

    fn set_character_stream(
        &mut self,
        index: usize,
        stream: CharacterStream,
    ) -> Result<(), DriverError> {
        let length = stream.length();
        let content = stream.read_into_string()?;
        self.bound.insert(index, Bound::Stream { content, length });
        Ok(())
    }

    fn set_null(&mut self, index: usize, sql_type: i32) -> Result<(), DriverError> {
        self.bound.insert(index, Bound::Null(sql_type));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TestRow {
    columns: HashMap<String, Option<String>>,
}

impl TestRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, column: &str, value: &str) -> Self {
        self.columns
            .insert(column.to_owned(), Some(value.to_owned()));
        self
    }

    #[allow(dead_code)]
    pub fn with_null(mut self, column: &str) -> Self {
        self.columns.insert(column.to_owned(), None);
        self
    }
}

impl RowAccess for TestRow {
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

/// Round-trip helper: whatever landed in the statement becomes a row column,
/// the way the database would hand it back.
pub fn row_from_statement(statement: &TestStatement, index: usize, column: &str) -> TestRow {
    match statement.text_at(index) {
        Some(text) => TestRow::new().with_text(column, text),
        None => TestRow::new().with_null(column),
    }
}
