//! Page components.

mod hero;

pub use hero::Hero;
