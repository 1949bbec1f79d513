//! Networking modules for the TutorMe REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `resource` defines the per-entity contract the
//! generic screens rely on, and `types`/`entities` define the wire schema.

pub mod api;
pub mod entities;
pub mod error;
pub mod resource;
pub mod types;
