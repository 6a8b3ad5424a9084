//! Social proof strip: overlapping avatars and the waitlist count.

use dioxus::prelude::*;
use gradient_hero_core::avatar_delay_ms;
use gradient_hero_core::content::TRUST_CAPTION_DELAY_MS;
use gradient_hero_ui::Avatar;

use crate::context::use_hero;

#[component]
pub fn TrustElements() -> Element {
    let content = use_hero().config.content;

    rsx! {
        div { class: "trust-elements",
            div { class: "avatar-stack",
                for (index, src) in content.avatars.iter().enumerate() {
                    Avatar { key: "{index}", src: src.clone(), delay_ms: avatar_delay_ms(index) }
                }
            }
            p {
                class: "trust-caption fade-in",
                style: "animation-delay: {TRUST_CAPTION_DELAY_MS}ms;",
                span { class: "trust-count", "{content.waitlist_count}" }
                " {content.waitlist_caption}"
            }
        }
    }
}
