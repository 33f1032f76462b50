//! Networking modules for the remote authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and defines the error taxonomy, `types`
//! defines the JSON bodies exchanged with the service.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_api;
