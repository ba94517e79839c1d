//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The capability traits the login flow depends on (`navigate`, `notify`)
//! and the pure form schema (`validate`) live here so page logic can be
//! tested without a browser.

pub mod navigate;
pub mod notify;
pub mod validate;
