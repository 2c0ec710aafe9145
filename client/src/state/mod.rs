//! View state for the registration pages.
//!
//! DESIGN
//! ======
//! Each page owns its state in a local `RwSignal`; nothing is shared between
//! the form and the list. State types are plain structs with transition
//! methods so every outcome can be unit-tested without a browser.

pub mod form;
pub mod form_layout;
pub mod list;
pub mod toast;
