//! Domain layer: board entities and the storage/policy interfaces.
//!
//! - [`entities`] - boards, invites, roles
//! - [`repositories`] - datastore and authorization traits
//!
//! The domain layer has no dependency on infrastructure or transport code.

pub mod entities;
pub mod repositories;
