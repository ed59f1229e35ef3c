//! HTTP API: JSON adapter over the integrity service.

pub mod app;
pub mod config;

pub use config::{ApiConfig, ConfigError};
