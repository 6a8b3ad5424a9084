//! Hero context provider.
//!
//! Provides the loaded configuration and the waitlist backend to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_hero_context);
//!
//! // In child components
//! let hero = use_hero();
//! let bars = hero.config.animation.bar_field();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use gradient_hero_core::{HeroConfig, SimulatedSubmitter, Submitter};

/// Startup state shared by every component.
#[derive(Clone)]
pub struct HeroContext {
    pub config: HeroConfig,
    /// Backend the waitlist form submits to
    pub submitter: Arc<dyn Submitter>,
}

impl HeroContext {
    pub fn new(config: HeroConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self { config, submitter }
    }

    /// Default config with the simulated backend.
    pub fn simulated_default() -> Self {
        let config = HeroConfig::default();
        let submitter = Arc::new(SimulatedSubmitter::new(config.waitlist.submit_latency()));
        Self::new(config, submitter)
    }
}

/// Get the startup context (config + backend).
pub fn get_hero_context() -> HeroContext {
    crate::get_hero_context()
}

/// Hook to access the hero context.
pub fn use_hero() -> HeroContext {
    use_context::<HeroContext>()
}
