//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and browser download concerns from page
//! and component logic to improve reuse and testability.

pub mod dates;
pub mod export;
