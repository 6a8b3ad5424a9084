//! Gradient Hero Core Library
//!
//! The view-independent logic behind the gradient bar hero section.
//!
//! ## Overview
//!
//! - **Wave**: three-sinusoid height function for the background bars
//! - **Bars**: projection of (bar index, offset) to a vertical scale
//! - **Clock**: fixed-cadence offset ticker, released on stop/drop
//! - **Waitlist**: Idle → Submitting → Submitted/Failed → Idle form machine
//!   with pluggable submission backends
//!
//! ## Quick Start
//!
//! ```ignore
//! use gradient_hero_core::{AnimationClock, HeroConfig, WaitlistController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HeroConfig::default();
//!     let field = config.animation.bar_field();
//!
//!     let clock = AnimationClock::start(&config.animation);
//!     let mut offsets = clock.subscribe();
//!     while offsets.changed().await.is_ok() {
//!         let offset = *offsets.borrow_and_update();
//!         for bar in field.bars(offset) {
//!             println!("{} -> {}", bar.index, bar.transform());
//!         }
//!     }
//!
//!     let waitlist = WaitlistController::from_config(&config.waitlist)?;
//!     waitlist.set_email("a@b.com");
//!     waitlist.submit();
//!     Ok(())
//! }
//! ```

pub mod bars;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod menu;
pub mod submit;
pub mod task;
pub mod waitlist;
pub mod wave;

// Re-exports
pub use bars::{Bar, BarField, DEFAULT_BAR_COUNT};
pub use clock::AnimationClock;
pub use config::{AnimationConfig, HeroConfig, WaitlistConfig};
pub use content::{avatar_delay_ms, HeroContent, NavLink, SocialKind, SocialLink};
pub use error::{HeroError, HeroResult};
pub use menu::MenuState;
pub use submit::{submitter_from_config, HttpSubmitter, SimulatedSubmitter, Submitter};
pub use task::TaskHandle;
pub use waitlist::{validate_email, FormSnapshot, FormState, Ticket, WaitlistController, WaitlistForm};
pub use wave::{wave_height, WaveGeometry};
