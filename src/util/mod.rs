//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep web-sys and timer glue out of state and component
//! logic so the gating machines stay natively testable.

pub mod persist;
pub mod redirect;
