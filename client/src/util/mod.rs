//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers with no browser dependencies, so page logic built on them can
//! be unit tested natively.

pub mod routes;
pub mod validation;
