//! Networking for the repository feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `github` talks to the public REST API, `types` defines the wire schema,
//! and `error` classifies what can go wrong on the way.

pub mod error;
pub mod github;
pub mod types;
