//! Hero page - the whole landing section.
//!
//! Layers, back to front: dark backdrop, animated gradient bars, fixed
//! navbar, centered content (social proof, headline, subtitle, waitlist
//! form, social links).

use dioxus::prelude::*;

use crate::components::{GradientBars, Navbar, SocialLinks, TrustElements, WaitlistForm};
use crate::context::use_hero;

/// Staggered fade-in delays for the subtitle lines
const SUBTITLE_DELAYS_MS: [u64; 2] = [200, 300];

#[component]
pub fn Hero() -> Element {
    let content = use_hero().config.content;

    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop" }
            GradientBars {}
            Navbar {}

            div { class: "hero-content",
                div { class: "hero-trust",
                    TrustElements {}
                }

                h1 { class: "hero-headline fade-in",
                    span { class: "headline-lead", "{content.headline_lead}" }
                    span { class: "headline-accent", "{content.headline_accent}" }
                }

                div { class: "hero-subtitle",
                    for (index, line) in content.subtitle.iter().enumerate() {
                        p {
                            key: "{index}",
                            class: "subtitle-line fade-in",
                            style: "animation-delay: {subtitle_delay_ms(index)}ms;",
                            "{line}"
                        }
                    }
                }

                div { class: "hero-form",
                    WaitlistForm {}
                }

                SocialLinks {}
            }
        }
    }
}

fn subtitle_delay_ms(index: usize) -> u64 {
    SUBTITLE_DELAYS_MS
        .get(index)
        .copied()
        .unwrap_or_else(|| SUBTITLE_DELAYS_MS[1] + 100 * (index as u64 - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_delays_continue_past_defaults() {
        assert_eq!(subtitle_delay_ms(0), 200);
        assert_eq!(subtitle_delay_ms(1), 300);
        assert_eq!(subtitle_delay_ms(2), 400);
        assert_eq!(subtitle_delay_ms(4), 600);
    }
}
