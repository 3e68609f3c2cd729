//! Generative backend providers for GameSmith
//!
//! The [`Provider`] trait abstracts the completion endpoint so the
//! generation client stays purely functional and testable; [`GeminiProvider`]
//! is the production implementation.

pub mod base;
pub mod gemini;

pub use base::Provider;
pub use gemini::GeminiProvider;
