//! Tracing subscriber setup.
//!
//! Filter precedence: explicit filter (the `--log` flag), then `RUST_LOG`,
//! then `info`.
//!
//! ```ignore
//! use gradient_hero_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("gradient_hero=debug,gradient_hero_core=debug")
//!     .init()?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{HeroError, HeroResult};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive (e.g., "gradient_hero_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Resolve the filter without installing anything.
    pub fn build_filter(&self) -> HeroResult<EnvFilter> {
        match &self.env_filter {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|e| HeroError::Logging(format!("bad filter {:?}: {}", directives, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the global subscriber.
    pub fn init(self) -> HeroResult<()> {
        let filter = self.build_filter()?;
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| HeroError::Logging(e.to_string()))
    }
}
