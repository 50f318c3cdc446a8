//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; the gating decisions
//! themselves live in `components` and `state`.

pub mod home;
pub mod login;
