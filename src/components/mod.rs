//! Gating components wrapping application content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoadGate` guards the application's first paint; `AuthGate` guards
//! individual protected subtrees. Both read shared state from Leptos
//! context providers and keep their decision logic in pure, natively
//! testable types.

pub mod auth_gate;
pub mod load_gate;
