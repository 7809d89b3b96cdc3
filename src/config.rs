use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub environment: Environment,
    pub binding: BindingConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Switches consulted by the type-descriptor layer when binding parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    pub use_stream_for_lob_binding: bool,
    pub log_parameter_values: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub log_listener_timings: bool,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("ROWCORE_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Binding overrides
        if let Ok(v) = env::var("ROWCORE_USE_STREAM_LOB") {
            self.binding.use_stream_for_lob_binding =
                v.parse().unwrap_or(self.binding.use_stream_for_lob_binding);
        }
        if let Ok(v) = env::var("ROWCORE_LOG_PARAMETER_VALUES") {
            self.binding.log_parameter_values =
                v.parse().unwrap_or(self.binding.log_parameter_values);
        }

        // Dispatch overrides
        if let Ok(v) = env::var("ROWCORE_LOG_LISTENER_TIMINGS") {
            self.dispatch.log_listener_timings =
                v.parse().unwrap_or(self.dispatch.log_listener_timings);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            binding: BindingConfig {
                use_stream_for_lob_binding: false,
                log_parameter_values: true,
            },
            dispatch: DispatchConfig {
                log_listener_timings: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            binding: BindingConfig {
                use_stream_for_lob_binding: false,
                log_parameter_values: false,
            },
            dispatch: DispatchConfig {
                log_listener_timings: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            binding: BindingConfig {
                use_stream_for_lob_binding: false,
                log_parameter_values: false,
            },
            dispatch: DispatchConfig {
                log_listener_timings: false,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<RuntimeConfig> = Lazy::new(RuntimeConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static RuntimeConfig {
    &CONFIG
}
