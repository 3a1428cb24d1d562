//! Infrastructure layer: concrete implementations of the domain interfaces.
//!
//! - [`persistence`] - in-memory and PostgreSQL board datastores
//! - [`authorization`] - default and permissive authorization policies

pub mod authorization;
pub mod persistence;
