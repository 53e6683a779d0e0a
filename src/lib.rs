//! # draftboard
//!
//! Leptos + WASM shell for the blog post editor console. An early mockup of
//! the editing surface: brand header, navigation sidebar, editor pane, and
//! publish panel, held together by a single click-counter reactivity demo.
//!
//! This crate contains the root component, presentational components, and the
//! shared UI state. There is no server and no persistence; every button that
//! is not wired to the counter is an inert placeholder.

pub mod app;
pub mod components;
pub mod state;

pub use app::App;
