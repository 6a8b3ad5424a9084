//! Configuration for the hero section.
//!
//! Every field has a default that reproduces the stock page, so a config
//! file only needs to name what it overrides:
//!
//! ```json
//! {
//!   "animation": { "bar_count": 24 },
//!   "waitlist": { "endpoint": "https://example.com/api/waitlist" }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bars::{BarField, DEFAULT_BAR_COUNT};
use crate::content::HeroContent;
use crate::error::{HeroError, HeroResult};
use crate::wave::{WaveGeometry, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_SPAN};

/// Animation clock period.
pub const DEFAULT_TICK_MS: u64 = 50;

/// Offset advance per tick.
pub const DEFAULT_STEP: f64 = 0.02;

/// Simulated submission latency.
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1500;

/// How long the success (or failure) message stays up before the form returns.
pub const DEFAULT_CONFIRMATION_MS: u64 = 3000;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub animation: AnimationConfig,
    pub waitlist: WaitlistConfig,
    pub content: HeroContent,
}

/// Background animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub bar_count: usize,
    pub tick_ms: u64,
    pub step: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            bar_count: DEFAULT_BAR_COUNT,
            tick_ms: DEFAULT_TICK_MS,
            step: DEFAULT_STEP,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl AnimationConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn geometry(&self) -> WaveGeometry {
        WaveGeometry {
            min_height: self.min_height,
            max_height: self.max_height,
            span: DEFAULT_SPAN,
        }
    }

    pub fn bar_field(&self) -> BarField {
        BarField::new(self.bar_count, self.geometry())
    }
}

/// Waitlist form settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistConfig {
    /// Latency of the simulated submitter (ignored when `endpoint` is set)
    pub submit_latency_ms: u64,
    /// Display time of the confirmation/failure message
    pub confirmation_ms: u64,
    /// Waitlist service URL; `None` keeps the simulated submitter
    pub endpoint: Option<String>,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            confirmation_ms: DEFAULT_CONFIRMATION_MS,
            endpoint: None,
        }
    }
}

impl WaitlistConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

impl HeroConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: HeroConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded hero config");
        Ok(config)
    }

    /// Reject values the animation or form cannot run with.
    pub fn validate(&self) -> HeroResult<()> {
        let anim = &self.animation;
        if anim.bar_count == 0 {
            return Err(HeroError::Config("bar_count must be at least 1".into()));
        }
        if anim.tick_ms == 0 {
            return Err(HeroError::Config("tick_ms must be positive".into()));
        }
        if !anim.step.is_finite() || anim.step <= 0.0 {
            return Err(HeroError::Config(format!(
                "step must be a positive number, got {}",
                anim.step
            )));
        }
        if !(anim.min_height.is_finite() && anim.max_height.is_finite())
            || anim.min_height >= anim.max_height
        {
            return Err(HeroError::Config(format!(
                "min_height ({}) must be below max_height ({})",
                anim.min_height, anim.max_height
            )));
        }
        if let Some(endpoint) = &self.waitlist.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(HeroError::Config(format!(
                    "waitlist endpoint must be an http(s) URL: {}",
                    endpoint
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = HeroConfig::default();
        config.validate().unwrap();
        assert_eq!(config.animation.bar_count, 15);
        assert_eq!(config.animation.tick_period(), Duration::from_millis(50));
        assert_eq!(config.waitlist.submit_latency(), Duration::from_millis(1500));
        assert_eq!(config.waitlist.confirmation_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hero.json");
        std::fs::write(
            &path,
            r#"{ "animation": { "bar_count": 24 }, "waitlist": { "endpoint": "https://example.com/join" } }"#,
        )
        .unwrap();

        let config = HeroConfig::load(&path).unwrap();
        assert_eq!(config.animation.bar_count, 24);
        assert_eq!(config.animation.step, DEFAULT_STEP);
        assert_eq!(config.waitlist.endpoint.as_deref(), Some("https://example.com/join"));
        assert_eq!(config.content, HeroContent::default());
    }

    #[test]
    fn inverted_heights_rejected() {
        let mut config = HeroConfig::default();
        config.animation.min_height = 200.0;
        assert!(matches!(config.validate(), Err(HeroError::Config(_))));
    }

    #[test]
    fn zero_bars_rejected() {
        let mut config = HeroConfig::default();
        config.animation.bar_count = 0;
        assert!(matches!(config.validate(), Err(HeroError::Config(_))));
    }

    #[test]
    fn zero_tick_rejected() {
        let mut config = HeroConfig::default();
        config.animation.tick_ms = 0;
        assert!(matches!(config.validate(), Err(HeroError::Config(_))));
    }

    #[test]
    fn zero_tick_file_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hero.json");
        std::fs::write(&path, r#"{ "animation": { "tick_ms": 0 } }"#).unwrap();
        assert!(matches!(HeroConfig::load(&path), Err(HeroError::Config(_))));
    }

    #[test]
    fn non_positive_or_non_finite_step_rejected() {
        for step in [0.0, -0.02, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut config = HeroConfig::default();
            config.animation.step = step;
            assert!(
                matches!(config.validate(), Err(HeroError::Config(_))),
                "step {} accepted",
                step
            );
        }
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let mut config = HeroConfig::default();
        config.waitlist.endpoint = Some("ftp://example.com".to_string());
        assert!(matches!(config.validate(), Err(HeroError::Config(_))));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hero.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(HeroConfig::load(&path), Err(HeroError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = HeroConfig::load(temp.path().join("absent.json"));
        assert!(matches!(result, Err(HeroError::Io(_))));
    }
}
