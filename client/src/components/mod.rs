//! Presentational components used by the login page.
//!
//! DESIGN
//! ======
//! Components receive signals and callbacks; none of them talks to the auth
//! provider directly.

pub mod brand_mark;
pub mod form_field;
pub mod toaster;
