//! # roster-common
//!
//! Shared utilities including the custom-id codec, configuration, error handling, and telemetry.

pub mod codec;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use codec::{decode, encode, CodecError, MAX_TOKEN_LEN};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, EngineConfig, Environment,
    RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
