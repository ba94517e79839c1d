//! Networking modules for the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the capability the login flow depends on, `supabase`
//! implements it over the provider's REST API, and `types` holds the wire
//! schema.

pub mod auth;
pub mod supabase;
pub mod types;
