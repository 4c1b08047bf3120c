//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls (browser only) and `types` defines the wire
//! schema shared with the backend.

pub mod api;
pub mod types;
