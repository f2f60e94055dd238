use dioxus::prelude::*;

use crate::nav::NavCatalog;

use super::{Footer, Header, Sidebar};

/// Persistent page frame: sidebar, header, content slot, footer.
///
/// The sidebar sits left of the content column on wide viewports and stacks
/// on top on narrow ones; the split is a stylesheet breakpoint, not Rust-side
/// viewport logic. Page content arrives through `children` and is placed
/// verbatim into the `main` region.
#[component]
pub fn DashboardShell(catalog: NavCatalog, children: Element) -> Element {
    rsx! {
        div { class: "tp-app",
            Sidebar { catalog }

            div { class: "tp-frame",
                Header {}
                main { class: "tp-main",
                    {children}
                }
                Footer {}
            }
        }
    }
}
