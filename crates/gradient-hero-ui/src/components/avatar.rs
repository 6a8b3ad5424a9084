//! Avatar Component
//!
//! Round user picture with a dark bottom fade. Avatars in a strip fade in
//! one after another via `delay_ms`.

use dioxus::prelude::*;

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Image path or URL
    pub src: String,
    /// Fade-in delay in milliseconds
    #[props(default = 0)]
    pub delay_ms: u64,
    #[props(default = "User avatar".to_string())]
    pub alt: String,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    rsx! {
        div {
            class: "avatar fade-in",
            style: "animation-delay: {props.delay_ms}ms;",
            img { class: "avatar-img", src: "{props.src}", alt: "{props.alt}" }
            div { class: "avatar-shade" }
        }
    }
}
