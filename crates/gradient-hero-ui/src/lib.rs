//! Gradient Hero UI Components
//!
//! Dioxus building blocks shared by the hero section: pill buttons, the
//! email input, the submit spinner, avatars and Lucide icons.
//!
//! Styling lives in the application's global stylesheet; components only
//! attach class names.

pub mod components;

pub use components::*;
