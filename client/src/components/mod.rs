//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, notifications, inline field
//! errors) and read shared state from Leptos context providers.

pub mod field_error;
pub mod nav_bar;
pub mod toast;
