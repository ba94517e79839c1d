//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`login` form, mount-time `session`, `toast`
//! queue) so components depend on small focused models.

pub mod login;
pub mod session;
pub mod toast;
