//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor shell chrome and read/write the shared click
//! counter from the Leptos context provided by `App`.

pub mod editor;
pub mod logo;
pub mod nav_sidebar;
pub mod publish_controls;
