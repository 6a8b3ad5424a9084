//! Navigation Bar
//!
//! Desktop: brand, inline links and the waitlist button.
//! Mobile: brand and a menu toggle that opens a dropdown panel.

use dioxus::prelude::*;
use gradient_hero_core::MenuState;
use gradient_hero_ui::{Button, ButtonVariant, Icon, IconButton, IconKind};

use crate::context::use_hero;

#[component]
pub fn Navbar() -> Element {
    let content = use_hero().config.content;
    let mut menu = use_signal(MenuState::default);

    let is_open = menu().is_open();
    let toggle_label = menu().toggle_label().to_string();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "navbar-row",
                    span { class: "brand", "{content.brand}" }

                    div { class: "nav-desktop",
                        for link in content.nav_links.iter() {
                            a { key: "{link.href}", class: "nav-link", href: "{link.href}", "{link.label}" }
                        }
                        Button { variant: ButtonVariant::Light, class: "nav-cta".to_string(),
                            "{content.cta_label}"
                        }
                    }

                    div { class: "nav-mobile-toggle",
                        IconButton {
                            onclick: move |_| {
                                let open = menu.write().toggle();
                                tracing::debug!(open, "Mobile menu toggled");
                            },
                            aria_label: toggle_label,
                            Icon { kind: if is_open { IconKind::Close } else { IconKind::Menu } }
                        }
                    }
                }

                if is_open {
                    div { class: "nav-mobile-panel fade-in",
                        for link in content.nav_links.iter() {
                            a {
                                key: "{link.href}",
                                class: "nav-link nav-link-mobile",
                                href: "{link.href}",
                                onclick: move |_| menu.write().close(),
                                "{link.label}"
                            }
                        }
                        Button { variant: ButtonVariant::Light, class: "nav-cta-mobile".to_string(),
                            "{content.cta_label}"
                        }
                    }
                }
            }
        }
    }
}
