//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The shell has exactly one piece of mutable state, the click counter in
//! `ui`. It lives in its own module so a future split into per-region state
//! slices (navigation, draft-save, publish) has somewhere to grow.

pub mod ui;
