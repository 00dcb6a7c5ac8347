//! Networking modules for the platform REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the read-side REST calls that seed shared state, and
//! `types` defines the record shapes shared with the server.

pub mod api;
pub mod types;
