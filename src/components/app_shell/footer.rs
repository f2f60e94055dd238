use dioxus::prelude::*;

/// Footer with static attribution
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "tp-footer",
            span { class: "tp-footer-text", "Tutor IA PAES" }
            span { class: "tp-footer-sep", "·" }
            span { class: "tp-footer-text", "Dashboard" }
        }
    }
}
