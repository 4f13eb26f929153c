//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads the shared client and
//! state from context, calls `net::api`, and delegates the chrome to
//! `components`.

pub mod board;
pub mod board_detail;
pub mod board_write;
pub mod home;
pub mod likes;
pub mod login;
pub mod pantry;
pub mod ranking;
pub mod receipts;
pub mod recommend_result;
pub mod register;
pub mod settings;
