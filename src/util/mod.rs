//! Utility helpers shared across pages and state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! navigation guards) from page logic so the logic stays natively testable.

pub mod auth;
pub mod dates;
pub mod ui_persistence;
pub mod validation;
