//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it wires form inputs to a state
//! signal, runs the submit flow from `state`, and delegates rendering details
//! to `components`.

pub mod home;
pub mod login;
pub mod signup;
