//! Configuration loading and management.
//!
//! - [`types`]: Core config structs (Config, ServerConfig) and loading
//! - [`delivery`]: Per-connection delivery queue settings
//! - [`validation`]: Startup checks collected into one error list

mod delivery;
mod types;
mod validation;

pub use delivery::DeliveryConfig;
pub use types::{Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
