//! Waitlist Form
//!
//! Email input and submit button, replaced by a confirmation line once the
//! address is on the list. The controller is owned by this component:
//! unmounting drops it and aborts any pending submission or confirmation
//! timer.

use std::rc::Rc;

use dioxus::prelude::*;
use gradient_hero_core::{FormState, WaitlistController};
use gradient_hero_ui::{Button, ButtonVariant, Input, Spinner};

use crate::context::use_hero;

#[component]
pub fn WaitlistForm() -> Element {
    let hero = use_hero();
    let content = hero.config.content.clone();

    let controller = use_hook(|| {
        Rc::new(WaitlistController::new(
            hero.submitter.clone(),
            hero.config.waitlist.confirmation_delay(),
        ))
    });
    let mut snapshot = use_signal(|| controller.snapshot());

    // Mirror controller state into the view
    let watched = controller.clone();
    use_future(move || {
        let mut updates = watched.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    let on_input = {
        let controller = controller.clone();
        move |value: String| controller.set_email(value)
    };

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if !controller.submit() {
                tracing::debug!("Waitlist submit rejected");
            }
        }
    };

    let current = snapshot();
    let submitting = current.state.is_submitting();

    rsx! {
        div { class: "waitlist",
            if current.state.shows_form() {
                form { class: "waitlist-form", onsubmit: on_submit,
                    Input {
                        value: current.email.clone(),
                        oninput: on_input,
                        input_type: "email".to_string(),
                        placeholder: content.email_placeholder.clone(),
                        required: true,
                        disabled: submitting,
                        class: "waitlist-input".to_string(),
                    }
                    Button {
                        variant: if submitting { ButtonVariant::Pending } else { ButtonVariant::Light },
                        button_type: "submit".to_string(),
                        disabled: submitting,
                        class: "waitlist-submit".to_string(),
                        if submitting {
                            Spinner {}
                        } else {
                            "{content.cta_label}"
                        }
                    }
                }
                if let FormState::Failed(reason) = &current.state {
                    p { class: "waitlist-error", role: "alert",
                        "We couldn't add you just now. Please try again. ({reason})"
                    }
                }
            } else {
                div { class: "waitlist-success fade-in", role: "status", "{content.success_message}" }
            }
        }
    }
}
