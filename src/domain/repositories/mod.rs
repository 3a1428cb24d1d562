//! Storage and policy trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure`; mock implementations
//! are generated via `mockall` for unit tests.
//!
//! - [`BoardDataStore`] - boards, invites and member roles
//! - [`AuthorizationStore`] - allow/deny decisions per board action

pub mod authorization_store;
pub mod board_data_store;

pub use authorization_store::AuthorizationStore;
pub use board_data_store::{BoardDataStore, BoardMutation, DataStoreKind};

#[cfg(test)]
pub use authorization_store::MockAuthorizationStore;
#[cfg(test)]
pub use board_data_store::MockBoardDataStore;
