//! Leptos views mounted into the host page containers.
//!
//! ARCHITECTURE
//! ============
//! Components render from already-loaded data; pages own loading and decide
//! which container each component is mounted into.

pub mod contact_card;
pub mod project_card;
pub mod timeline;
pub mod tools_grid;
