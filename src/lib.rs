//! # truthlens
//!
//! Leptos + WASM front-end for the TruthLens multi-modal lie-detection
//! product. This crate contains pages, components, client-side state, the
//! analysis provider seam, and the placeholder backend contract.
//!
//! Every analysis result in this build is simulated: authentication is a
//! client-side fabrication persisted to localStorage, and analysis actions
//! resolve against either a pending-integration failure or a static mock
//! table.

pub mod analysis;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
