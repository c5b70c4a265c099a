//! Backend contract placeholders.
//!
//! SYSTEM CONTEXT
//! ==============
//! No request is ever issued by this build; `endpoints` documents the paths
//! a future backend integration is expected to serve.

pub mod endpoints;
