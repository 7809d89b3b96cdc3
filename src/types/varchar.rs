use crate::driver::{ParameterBinder, RowAccess};
use crate::error::DriverError;
use crate::types::value_type::ValueTypeDescriptor;
use crate::types::{codes, BindOptions, SqlTypeDescriptor};

/// Descriptor for plain character columns. Always binds directly; the
/// streaming option only concerns large-object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VarcharType;

impl VarcharType {
    pub fn binder<'a, J: ValueTypeDescriptor>(&self, value_type: &'a J) -> VarcharBinder<'a, J> {
        VarcharBinder { value_type }
    }

    pub fn extractor<'a, J: ValueTypeDescriptor>(
        &self,
        value_type: &'a J,
    ) -> VarcharExtractor<'a, J> {
        VarcharExtractor { value_type }
    }
}

impl SqlTypeDescriptor for VarcharType {
    fn sql_type(&self) -> i32 {
        codes::VARCHAR
    }
}

pub struct VarcharBinder<'a, J: ValueTypeDescriptor> {
    value_type: &'a J,
}

impl<'a, J: ValueTypeDescriptor> VarcharBinder<'a, J> {
    pub fn bind<S: ParameterBinder + ?Sized>(
        &self,
        statement: &mut S,
        value: Option<&J::Value>,
        index: usize,
        options: &BindOptions,
    ) -> Result<(), DriverError> {
        let Some(value) = value else {
            tracing::trace!(index, "binding parameter as NULL");
            return statement.set_null(index, codes::VARCHAR);
        };
        let text = self.value_type.unwrap_str(value, options);
        if options.log_parameter_values() {
            tracing::trace!(index, value = %text, "binding varchar");
        } else {
            tracing::trace!(index, "binding varchar");
        }
        statement.set_str(index, &text)
    }
}

pub struct VarcharExtractor<'a, J: ValueTypeDescriptor> {
    value_type: &'a J,
}

impl<'a, J: ValueTypeDescriptor> VarcharExtractor<'a, J> {
    pub fn extract<R: RowAccess + ?Sized>(
        &self,
        row: &R,
        column: &str,
        options: &BindOptions,
    ) -> Result<Option<J::Value>, DriverError> {
        let native = row.get_str(column)?;
        Ok(native.map(|text| self.value_type.wrap_str(text, options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BoundParam, MockStatement};
    use crate::types::StringValueType;

    #[test]
    fn binds_direct_regardless_of_stream_option() {
        let mut statement = MockStatement::new();
        let binder = VarcharType.binder(&StringValueType);

        binder
            .bind(
                &mut statement,
                Some(&"short".to_string()),
                1,
                &BindOptions::new(true),
            )
            .unwrap();

        match statement.param(1) {
            Some(BoundParam::Str(s)) => assert_eq!(s, "short"),
            other => panic!("expected plain string bind, got {:?}", other),
        }
    }

    #[test]
    fn cannot_be_remapped() {
        assert_eq!(VarcharType.sql_type(), codes::VARCHAR);
        assert!(!VarcharType.can_be_remapped());
    }
}
