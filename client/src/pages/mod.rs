//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal and network calls and delegates rendering
//! details to `components`.

pub mod registration_form;
pub mod registration_list;
