//! Hero section components.

mod gradient_bars;
mod navbar;
mod social_links;
mod trust_elements;
mod waitlist_form;

pub use gradient_bars::GradientBars;
pub use navbar::Navbar;
pub use social_links::SocialLinks;
pub use trust_elements::TrustElements;
pub use waitlist_form::WaitlistForm;
