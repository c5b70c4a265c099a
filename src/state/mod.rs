//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `reports`, `settings`, `fusion`) so
//! individual pages can depend on small focused models. Pure logic lives in
//! free functions beside the state structs and is unit-tested natively.

pub mod fusion;
pub mod reports;
pub mod session;
pub mod settings;
