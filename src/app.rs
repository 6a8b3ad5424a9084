use dioxus::prelude::*;

use crate::context::get_hero_context;
use crate::pages::Hero;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the hero context.
#[component]
pub fn App() -> Element {
    use_context_provider(get_hero_context);

    rsx! {
        style { {GLOBAL_STYLES} }
        Hero {}
    }
}
