use dioxus::prelude::*;
use gradient_hero_ui::{Icon, IconKind};

use crate::context::use_hero;

/// Footer row of social icons
#[component]
pub fn SocialLinks() -> Element {
    let content = use_hero().config.content;

    rsx! {
        div { class: "social-links",
            for link in content.social_links.iter() {
                a {
                    key: "{link.kind.label()}",
                    class: "social-link",
                    href: "{link.href}",
                    "aria-label": "{link.kind.label()}",
                    Icon { kind: IconKind::from(link.kind), size: 20 }
                }
            }
        }
    }
}
