//! Persistence capability for boards, invites and member roles.

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::domain::entities::{Board, Invite};
use crate::error::AppError;

/// In-place change to a stored board, run by [`BoardDataStore::modify_board`].
pub type BoardMutation = Box<dyn FnOnce(&mut Board) -> Result<(), AppError> + Send>;

/// Which backend a [`BoardDataStore`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStoreKind {
    InMemory,
    Postgres,
}

impl fmt::Display for DataStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataStoreKind::InMemory => f.write_str("in-memory"),
            DataStoreKind::Postgres => f.write_str("postgres"),
        }
    }
}

/// Storage interface shared by the application service and the default
/// authorization policy.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryBoardDataStore`] - process-local, ephemeral
/// - [`crate::infrastructure::persistence::PgBoardDataStore`] - PostgreSQL JSONB documents
/// - Test mocks available with `cfg(test)`
///
/// Implementations must be safe for concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardDataStore: Send + Sync {
    /// Backend variant, for diagnostics.
    fn kind(&self) -> DataStoreKind;

    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a board with the same id exists.
    async fn create_board(&self, board: &Board) -> Result<(), AppError>;

    async fn board(&self, board_id: Uuid) -> Result<Option<Board>, AppError>;

    /// Lists boards `user_id` is a member of, newest first.
    async fn boards_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError>;

    /// Applies `mutation` to the stored board and saves the result as one
    /// atomic step, returning the saved board.
    ///
    /// Concurrent modifications of the same board are serialised, so none
    /// of them is lost. If `mutation` fails nothing is written and its error
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the board does not exist.
    async fn modify_board(
        &self,
        board_id: Uuid,
        mutation: BoardMutation,
    ) -> Result<Board, AppError>;

    /// Deletes a board and all of its invites.
    ///
    /// Returns `Ok(false)` if the board did not exist.
    async fn delete_board(&self, board_id: Uuid) -> Result<bool, AppError>;

    async fn create_invite(&self, invite: &Invite) -> Result<(), AppError>;

    async fn invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<Option<Invite>, AppError>;

    /// Lists all invites of a board, oldest first, expired ones included.
    async fn invites(&self, board_id: Uuid) -> Result<Vec<Invite>, AppError>;

    /// Returns `Ok(false)` if the invite did not exist.
    async fn delete_invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<bool, AppError>;
}
