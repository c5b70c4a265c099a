//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped UI state and delegates shared behavior to
//! `state`, `analysis`, and `components`. Protected pages install the
//! unauthenticated redirect and render inside the application shell.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod face;
pub mod faq;
pub mod fusion;
pub mod how_it_works;
pub mod landing;
pub mod login;
pub mod reports;
pub mod settings;
pub mod signup;
pub mod text;
pub mod voice;
