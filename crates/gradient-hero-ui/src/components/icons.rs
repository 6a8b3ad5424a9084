//! Lucide icons used by the hero section, rendered as inline SVG.

use dioxus::prelude::*;
use gradient_hero_core::SocialKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Menu,
    Close,
    Instagram,
    Linkedin,
    Github,
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Instagram => IconKind::Instagram,
            SocialKind::LinkedIn => IconKind::Linkedin,
            SocialKind::GitHub => IconKind::Github,
        }
    }
}

/// Inline Lucide icon
#[component]
pub fn Icon(kind: IconKind, #[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_body(kind)}
        }
    }
}

fn icon_body(kind: IconKind) -> Element {
    match kind {
        IconKind::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        IconKind::Instagram => rsx! {
            rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        },
        IconKind::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_kinds_map_to_icons() {
        assert_eq!(IconKind::from(SocialKind::Instagram), IconKind::Instagram);
        assert_eq!(IconKind::from(SocialKind::LinkedIn), IconKind::Linkedin);
        assert_eq!(IconKind::from(SocialKind::GitHub), IconKind::Github);
    }
}
