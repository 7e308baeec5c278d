//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, and `submission`
//! wraps one in-flight call per form with observable phases.

pub mod api;
pub mod submission;
pub mod types;
