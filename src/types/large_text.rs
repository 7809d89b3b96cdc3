//! Descriptor for large character (CLOB-equivalent) columns.
//!
//! Many drivers historically lack full support for the richer national
//! large-character type, so this descriptor reports the plain large-object
//! code and allows the schema layer to remap it. Binding has two variants:
//! direct through the driver-native large-object setter, or as a character
//! stream. Which one runs is decided per bind call from the runtime options,
//! not at construction time, because it depends on driver capability
//! detection rather than on the type itself.

use crate::driver::{ParameterBinder, RowAccess};
use crate::error::DriverError;
use crate::types::value_type::ValueTypeDescriptor;
use crate::types::{codes, BindOptions, SqlTypeDescriptor};

/// Closed set of binding variants for large character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrategy {
    Direct,
    Streaming,
}

/// Strategy object for one large-character SQL type. The three constants
/// below are the only instances; they are stateless and shared process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeTextType {
    forced: Option<BindingStrategy>,
}

impl LargeTextType {
    /// Picks the binding variant from the runtime options at bind time.
    pub const DEFAULT: LargeTextType = LargeTextType { forced: None };

    /// Always binds through the driver-native large-object setter.
    pub const DIRECT_BINDING: LargeTextType = LargeTextType {
        forced: Some(BindingStrategy::Direct),
    };

    /// Always binds as a character stream.
    pub const STREAM_BINDING: LargeTextType = LargeTextType {
        forced: Some(BindingStrategy::Streaming),
    };

    /// Pure selection of the binding variant for one bind call.
    pub fn strategy_for(&self, options: &BindOptions) -> BindingStrategy {
        self.forced.unwrap_or(if options.use_stream_for_lob_binding() {
            BindingStrategy::Streaming
        } else {
            BindingStrategy::Direct
        })
    }

    pub fn binder<'a, J: ValueTypeDescriptor>(&self, value_type: &'a J) -> LargeTextBinder<'a, J> {
        LargeTextBinder {
            descriptor: *self,
            value_type,
        }
    }

    pub fn extractor<'a, J: ValueTypeDescriptor>(
        &self,
        value_type: &'a J,
    ) -> LargeTextExtractor<'a, J> {
        LargeTextExtractor { value_type }
    }
}

impl SqlTypeDescriptor for LargeTextType {
    /// Reported as plain CLOB for every variant so upstream DDL decisions
    /// stay uniform across drivers.
    fn sql_type(&self) -> i32 {
        codes::CLOB
    }

    fn can_be_remapped(&self) -> bool {
        true
    }
}

/// Writes a large character value into one statement parameter. Stateless;
/// constructed fresh per call and safe to share across threads.
pub struct LargeTextBinder<'a, J: ValueTypeDescriptor> {
    descriptor: LargeTextType,
    value_type: &'a J,
}

impl<'a, J: ValueTypeDescriptor> LargeTextBinder<'a, J> {
    pub fn bind<S: ParameterBinder + ?Sized>(
        &self,
        statement: &mut S,
        value: Option<&J::Value>,
        index: usize,
        options: &BindOptions,
    ) -> Result<(), DriverError> {
        let Some(value) = value else {
            tracing::trace!(index, "binding parameter as NULL");
            return statement.set_null(index, self.descriptor.sql_type());
        };

        match self.descriptor.strategy_for(options) {
            BindingStrategy::Direct => {
                let text = self.value_type.unwrap_large_text(value, options);
                if options.log_parameter_values() {
                    tracing::trace!(index, value = text.as_str(), "binding large text directly");
                } else {
                    tracing::trace!(index, "binding large text directly");
                }
                statement.set_large_text(index, text)
            }
            BindingStrategy::Streaming => {
                let stream = self.value_type.unwrap_stream(value, options);
                tracing::trace!(index, length = ?stream.length(), "binding large text as character stream");
                statement.set_character_stream(index, stream)
            }
        }
    }
}

/// Reads a large character column out of a row and wraps it back into the
/// application value type.
pub struct LargeTextExtractor<'a, J: ValueTypeDescriptor> {
    value_type: &'a J,
}

impl<'a, J: ValueTypeDescriptor> LargeTextExtractor<'a, J> {
    pub fn extract<R: RowAccess + ?Sized>(
        &self,
        row: &R,
        column: &str,
        options: &BindOptions,
    ) -> Result<Option<J::Value>, DriverError> {
        let native = row.get_large_text(column)?;
        tracing::trace!(column, found = native.is_some(), "extracted large text column");
        Ok(native.map(|text| self.value_type.wrap_large_text(text, options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BoundParam, MockRow, MockStatement};
    use crate::types::StringValueType;

    #[test]
    fn default_variant_follows_options() {
        let streaming = BindOptions::new(true);
        let direct = BindOptions::new(false);
        assert_eq!(
            LargeTextType::DEFAULT.strategy_for(&streaming),
            BindingStrategy::Streaming
        );
        assert_eq!(
            LargeTextType::DEFAULT.strategy_for(&direct),
            BindingStrategy::Direct
        );
    }

    #[test]
    fn forced_variants_ignore_options() {
        let streaming = BindOptions::new(true);
        let direct = BindOptions::new(false);
        assert_eq!(
            LargeTextType::DIRECT_BINDING.strategy_for(&streaming),
            BindingStrategy::Direct
        );
        assert_eq!(
            LargeTextType::STREAM_BINDING.strategy_for(&direct),
            BindingStrategy::Streaming
        );
    }

    #[test]
    fn sql_type_is_clob_for_every_variant() {
        for descriptor in [
            LargeTextType::DEFAULT,
            LargeTextType::DIRECT_BINDING,
            LargeTextType::STREAM_BINDING,
        ] {
            assert_eq!(descriptor.sql_type(), codes::CLOB);
            assert!(descriptor.can_be_remapped());
        }
    }

    #[test]
    fn direct_bind_sets_large_text() {
        let mut statement = MockStatement::new();
        let binder = LargeTextType::DEFAULT.binder(&StringValueType);
        let options = BindOptions::new(false);

        binder
            .bind(&mut statement, Some(&"hello".to_string()), 1, &options)
            .unwrap();

        match statement.param(1) {
            Some(BoundParam::LargeText(text)) => assert_eq!(text.as_str(), "hello"),
            other => panic!("expected direct large text bind, got {:?}", other),
        }
    }

    #[test]
    fn streaming_bind_sets_character_stream() {
        let mut statement = MockStatement::new();
        let binder = LargeTextType::DEFAULT.binder(&StringValueType);
        let options = BindOptions::new(true);

        binder
            .bind(&mut statement, Some(&"streamed text".to_string()), 1, &options)
            .unwrap();

        match statement.param(1) {
            Some(BoundParam::CharacterStream { content, length }) => {
                assert_eq!(content, "streamed text");
                assert_eq!(*length, Some(13));
            }
            other => panic!("expected character stream bind, got {:?}", other),
        }
    }

    /// Value type backed by a reader, so the stream length is unknown.
    struct ReaderBackedValueType;

    impl ValueTypeDescriptor for ReaderBackedValueType {
        type Value = String;

        fn unwrap_large_text(&self, value: &String, _options: &BindOptions) -> crate::driver::LargeText {
            crate::driver::LargeText::new(value.clone())
        }

        fn unwrap_stream(&self, value: &String, _options: &BindOptions) -> crate::driver::CharacterStream {
            crate::driver::CharacterStream::from_reader(Box::new(std::io::Cursor::new(
                value.clone().into_bytes(),
            )))
        }

        fn unwrap_str(&self, value: &String, _options: &BindOptions) -> String {
            value.clone()
        }

        fn wrap_large_text(&self, native: crate::driver::LargeText, _options: &BindOptions) -> String {
            native.into_string()
        }

        fn wrap_str(&self, native: String, _options: &BindOptions) -> String {
            native
        }
    }

    #[test]
    fn streaming_bind_carries_unknown_length_marker() {
        let mut statement = MockStatement::new();
        let binder = LargeTextType::DEFAULT.binder(&ReaderBackedValueType);
        let options = BindOptions::new(true);

        binder
            .bind(&mut statement, Some(&"streamed text".to_string()), 1, &options)
            .unwrap();

        match statement.param(1) {
            Some(BoundParam::CharacterStream { content, length }) => {
                assert_eq!(content, "streamed text");
                assert_eq!(*length, None);
            }
            other => panic!("expected character stream bind, got {:?}", other),
        }
    }

    #[test]
    fn none_binds_null_with_clob_code() {
        let mut statement = MockStatement::new();
        let binder = LargeTextType::DEFAULT.binder(&StringValueType);
        let options = BindOptions::new(false);

        binder.bind(&mut statement, None, 1, &options).unwrap();

        match statement.param(1) {
            Some(BoundParam::Null { sql_type }) => assert_eq!(*sql_type, codes::CLOB),
            other => panic!("expected NULL bind, got {:?}", other),
        }
    }

    #[test]
    fn extractor_wraps_column_value() {
        let row = MockRow::new().with_text("body", "hello");
        let extractor = LargeTextType::DEFAULT.extractor(&StringValueType);
        let options = BindOptions::new(false);

        let value = extractor.extract(&row, "body", &options).unwrap();
        assert_eq!(value.as_deref(), Some("hello"));
    }

    #[test]
    fn extractor_surfaces_null_as_none() {
        let row = MockRow::new().with_null("body");
        let extractor = LargeTextType::DEFAULT.extractor(&StringValueType);
        let options = BindOptions::new(false);

        let value = extractor.extract(&row, "body", &options).unwrap();
        assert_eq!(value, None);
    }
}
