// SQL type descriptors: per-column-type strategies for binding application
// values into statement parameters and extracting them back out of rows.

pub mod large_text;
pub mod value_type;
pub mod varchar;

pub use large_text::*;
pub use value_type::*;
pub use varchar::*;

use crate::config::RuntimeConfig;

/// JDBC-style numeric SQL type codes, used for DDL/type-compatibility
/// decisions upstream.
pub mod codes {
    pub const LONGVARCHAR: i32 = -1;
    pub const VARCHAR: i32 = 12;
    pub const CLOB: i32 = 2005;
    pub const NCLOB: i32 = 2011;
}

/// Per-operation switches consulted at bind/extract time. Carries the
/// environment-dependent knobs the descriptors themselves stay free of.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindOptions {
    use_stream_for_lob_binding: bool,
    log_parameter_values: bool,
}

impl BindOptions {
    pub fn new(use_stream_for_lob_binding: bool) -> Self {
        Self {
            use_stream_for_lob_binding,
            log_parameter_values: false,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            use_stream_for_lob_binding: config.binding.use_stream_for_lob_binding,
            log_parameter_values: config.binding.log_parameter_values,
        }
    }

    /// Whether large character values should be bound as streams rather than
    /// through the driver-native large-object setter.
    pub fn use_stream_for_lob_binding(&self) -> bool {
        self.use_stream_for_lob_binding
    }

    /// Whether bind/extract trace logging may include the actual value.
    pub fn log_parameter_values(&self) -> bool {
        self.log_parameter_values
    }
}

/// One SQL column type's binding behavior. Descriptors are stateless
/// process-wide values, shared across all sessions.
///
/// The binder/extractor constructors live on the concrete descriptor types
/// because they are generic over the value-type descriptor; this trait carries
/// the parts the schema/DDL layer consults.
pub trait SqlTypeDescriptor: Send + Sync {
    /// The fixed SQL type code this descriptor represents.
    fn sql_type(&self) -> i32;

    /// Whether the schema layer may substitute a more broadly supported SQL
    /// type when the target driver lacks support for this one.
    fn can_be_remapped(&self) -> bool {
        false
    }
}
