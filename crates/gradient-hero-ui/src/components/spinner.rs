//! Loading spinner shown inside the submit button.

use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "spinner",
            role: "status",
            "aria-label": "Submitting",
        }
    }
}
