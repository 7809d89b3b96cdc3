// Lifecycle event system: listeners grouped per event type, consulted by the
// session pipeline on every persistence operation.

pub mod dispatch;
pub mod error;
pub mod listener;
pub mod registry;
pub mod service;
pub mod types;

// Re-export core types
pub use dispatch::*;
pub use error::*;
pub use listener::*;
pub use registry::*;
pub use service::*;
pub use types::*;
