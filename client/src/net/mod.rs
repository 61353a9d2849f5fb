//! Networking modules for the rental REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the backend collaborator and its HTTP implementation,
//! `credentials` supplies bearer tokens, `error` classifies failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod credentials;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_api;
