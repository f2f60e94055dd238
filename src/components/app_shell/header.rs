use dioxus::prelude::*;

use crate::nav::DASHBOARD_ROUTE;

/// Top bar with the brand link and a user placeholder.
///
/// The "Dashboard" caption next to the brand is hidden on narrow viewports
/// by the stylesheet.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "tp-appbar",
            div { class: "tp-appbar-left",
                a {
                    class: "tp-brand",
                    href: DASHBOARD_ROUTE,
                    "aria-label": "Ir al inicio del dashboard",
                    "Tutor IA PAES"
                }
                span { class: "tp-appbar-caption", "Dashboard" }
            }

            div { class: "tp-appbar-right",
                span { class: "tp-appbar-user", "Usuario" }
            }
        }
    }
}
