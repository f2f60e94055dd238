//! UI components for the Tutor IA PAES dashboard.
//!
//! This module contains all Dioxus components that make up the user interface.
//!
//! - `app_shell`: DashboardShell, Header, Sidebar, Footer
//! - `home`: placeholder landing view for the dashboard root
//!
//! The navigation catalog is not shared through context: [`App`] builds it
//! once and threads it down as a plain prop, so the sidebar has no hidden
//! dependencies.

mod app_shell;
mod home;

pub use app_shell::{DashboardShell, Footer, Header, Sidebar};
pub use home::HomeView;

use crate::nav::NavCatalog;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Main app component: builds the navigation catalog and composes the shell
/// around the landing view.
#[component]
pub fn App() -> Element {
    // Static configuration, assembled once when the app mounts
    let catalog = use_hook(NavCatalog::default);

    use_effect({
        let entries = catalog.len();
        let links = catalog.items().iter().filter(|item| item.is_link()).count();
        move || info!("navigation catalog ready: {entries} entries, {links} linked")
    });

    rsx! {
        DashboardShell { catalog,
            HomeView {}
        }
    }
}
