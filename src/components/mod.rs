//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome (brand bar, section tabs, bottom
//! tab bar) and the auth guard, reading shared state from Leptos context.

pub mod require_auth;
pub mod tab_bar;
pub mod top_bar;
pub mod top_nav;
