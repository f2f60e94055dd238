use dioxus::prelude::*;

use crate::nav::{NavCatalog, NavTarget};

/// Sidebar navigation driven by the injected catalog.
///
/// Each catalog entry renders as one row keyed by its label, in catalog
/// order. Linked entries become anchors to their route; placeholder entries
/// become inert rows with `aria-disabled` so assistive technology announces
/// them as unavailable. An empty catalog renders an empty `nav` region.
#[component]
pub fn Sidebar(catalog: NavCatalog) -> Element {
    let rows = catalog.items().iter().map(|item| {
        let description = item.description.as_ref().map(|text| {
            rsx! {
                span { class: "tp-nav-desc", "{text}" }
            }
        });

        match item.target {
            NavTarget::Route(href) => rsx! {
                a {
                    key: "{item.label}",
                    class: "tp-nav-row tp-nav-row--link",
                    href: href,
                    span { class: "tp-nav-label", "{item.label}" }
                    {description}
                }
            },
            NavTarget::Disabled => rsx! {
                div {
                    key: "{item.label}",
                    class: "tp-nav-row tp-nav-row--muted",
                    "aria-disabled": "true",
                    span { class: "tp-nav-label", "{item.label}" }
                    {description}
                }
            },
        }
    });

    rsx! {
        aside { class: "tp-sidebar",
            div { class: "tp-sidebar-heading",
                span { class: "tp-sidebar-title", "Navegación" }
                span { class: "tp-sidebar-subtitle", "Secciones principales" }
            }

            nav { class: "tp-nav",
                {rows}
            }
        }
    }
}
