//! Gradient Bars Background
//!
//! A row of orange-to-transparent bars whose heights follow the wave
//! function. The animation clock lives inside this component's future, so
//! unmounting the component drops the clock and releases its tick task.

use dioxus::prelude::*;
use gradient_hero_core::AnimationClock;

use crate::context::use_hero;

#[component]
pub fn GradientBars() -> Element {
    let hero = use_hero();
    let animation = hero.config.animation.clone();
    let field = animation.bar_field();
    let mut offset = use_signal(|| 0.0_f64);

    // Tick until unmount
    use_future(move || {
        let animation = animation.clone();
        async move {
            let clock = AnimationClock::start(&animation);
            let mut ticks = clock.subscribe();
            while ticks.changed().await.is_ok() {
                let next = *ticks.borrow_and_update();
                offset.set(next);
            }
        }
    });

    let width = field.bar_width_percent();

    rsx! {
        div { class: "gradient-bars", "aria-hidden": "true",
            div { class: "gradient-bars-row",
                for bar in field.bars(offset()) {
                    div {
                        key: "{bar.index}",
                        class: "gradient-bar",
                        style: "flex: 1 0 {width}%; max-width: {width}%; transform: {bar.transform()};",
                    }
                }
            }
        }
    }
}
