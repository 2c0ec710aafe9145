//! Networking modules for the registration backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` locates the backend, `api` performs the two REST calls, and
//! `types` defines the registration wire schema.

pub mod api;
pub mod config;
pub mod types;
