//! Tutor IA PAES - dashboard shell.
//!
//! A cross-platform Dioxus application that renders the persistent page frame
//! (header, sidebar navigation, footer) around the dashboard landing view for
//! the PAES tutoring panel.
//!
//! # Architecture
//!
//! - **Navigation catalog**: an immutable, validated list of sidebar entries
//!   ([`nav::NavCatalog`]), built once at startup and injected by prop
//! - **App shell**: header, sidebar, and footer composed into a responsive
//!   frame with a content slot for the active view
//! - **Landing view**: placeholder cards for the upcoming catalog, question
//!   bank, attempts, and progress sections
//!
//! # Platform Support
//!
//! - **Web (WASM)**: runs in the browser
//! - **Desktop**: macOS/Windows/Linux window via the `desktop` feature
//!
//! # Examples
//!
//! ```ignore
//! use tutoria_paes::nav::NavCatalog;
//!
//! let catalog = NavCatalog::default();
//! assert_eq!(catalog.items().len(), 9);
//! ```

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod error;
pub mod nav;
