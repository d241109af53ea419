//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`dom`, `theme`) and pure
//! formatting (`month`) from page and component logic.

pub mod dom;
pub mod month;
pub mod theme;
