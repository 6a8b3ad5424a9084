//! Reusable UI components for the hero section
//!
//! Dark translucent surfaces, white pill buttons, Space Grotesk text.

mod avatar;
mod button;
mod icons;
mod input;
mod spinner;

pub use avatar::*;
pub use button::*;
pub use icons::*;
pub use input::*;
pub use spinner::*;
