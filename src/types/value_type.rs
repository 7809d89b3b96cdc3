use serde_json::Value;

use crate::driver::{CharacterStream, LargeText};
use crate::types::BindOptions;

/// Converts between an application-level value and the driver-facing
/// representations a SQL type descriptor needs. The descriptor never inspects
/// the application value itself; all type-specific knowledge lives here, so
/// one SQL-type strategy serves every value type that maps onto it.
pub trait ValueTypeDescriptor: Send + Sync {
    type Value: Send + Sync;

    fn unwrap_large_text(&self, value: &Self::Value, options: &BindOptions) -> LargeText;

    fn unwrap_stream(&self, value: &Self::Value, options: &BindOptions) -> CharacterStream;

    fn unwrap_str(&self, value: &Self::Value, options: &BindOptions) -> String;

    fn wrap_large_text(&self, native: LargeText, options: &BindOptions) -> Self::Value;

    fn wrap_str(&self, native: String, options: &BindOptions) -> Self::Value;
}

/// Plain `String` application values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValueType;

impl ValueTypeDescriptor for StringValueType {
    type Value = String;

    fn unwrap_large_text(&self, value: &String, _options: &BindOptions) -> LargeText {
        LargeText::new(value.clone())
    }

    fn unwrap_stream(&self, value: &String, _options: &BindOptions) -> CharacterStream {
        CharacterStream::from_string(value.clone())
    }

    fn unwrap_str(&self, value: &String, _options: &BindOptions) -> String {
        value.clone()
    }

    fn wrap_large_text(&self, native: LargeText, _options: &BindOptions) -> String {
        native.into_string()
    }

    fn wrap_str(&self, native: String, _options: &BindOptions) -> String {
        native
    }
}

/// JSON application values, for record fields held as `serde_json::Value`.
/// Non-string JSON is serialized on unwrap and wraps back as a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValueType;

impl JsonValueType {
    fn to_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl ValueTypeDescriptor for JsonValueType {
    type Value = Value;

    fn unwrap_large_text(&self, value: &Value, _options: &BindOptions) -> LargeText {
        LargeText::new(Self::to_text(value))
    }

    fn unwrap_stream(&self, value: &Value, _options: &BindOptions) -> CharacterStream {
        CharacterStream::from_string(Self::to_text(value))
    }

    fn unwrap_str(&self, value: &Value, _options: &BindOptions) -> String {
        Self::to_text(value)
    }

    fn wrap_large_text(&self, native: LargeText, _options: &BindOptions) -> Value {
        Value::String(native.into_string())
    }

    fn wrap_str(&self, native: String, _options: &BindOptions) -> Value {
        Value::String(native)
    }
}
