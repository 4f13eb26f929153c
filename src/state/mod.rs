//! Client-side state shared between pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds plain data plus the transitions pages apply to it.
//! Pages wrap these in `RwSignal`s and provide them via context; the types
//! themselves stay free of reactive machinery so they test natively.

pub mod auth;
pub mod board;
pub mod pantry;
pub mod receipts;
pub mod recommend;
