//! Networking: data document loading and the document schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the fetches and owns [`api::LoadError`]; `types` defines the
//! JSON documents the pages render.

pub mod api;
pub mod types;
