//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `identity`, `readiness`) so gating
//! components can depend on small focused models. Everything here is plain
//! data with pure transitions; reactivity is layered on via `RwSignal`
//! contexts and `Memo` projections.

pub mod identity;
pub mod readiness;
pub mod session;
