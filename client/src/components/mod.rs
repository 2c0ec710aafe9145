//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, form inputs, and tables. Pages own the
//! state signals and hand components only what they display.

pub mod busy_overlay;
pub mod form_field;
pub mod navbar;
pub mod registration_tables;
pub mod toaster;
