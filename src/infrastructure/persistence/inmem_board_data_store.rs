//! In-memory implementation of the board datastore.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Board, Invite};
use crate::domain::repositories::{BoardDataStore, BoardMutation, DataStoreKind};
use crate::error::AppError;

#[derive(Default)]
struct State {
    boards: HashMap<Uuid, Board>,
    /// Invites keyed by board id.
    invites: HashMap<Uuid, Vec<Invite>>,
}

/// Ephemeral datastore backed by hash maps.
///
/// Data is lost when the process exits. Used for development, tests and
/// single-instance deployments that do not need durability.
pub struct InMemoryBoardDataStore {
    state: RwLock<State>,
}

impl InMemoryBoardDataStore {
    pub fn new() -> Self {
        debug!("Using in-memory board datastore");
        Self {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for InMemoryBoardDataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BoardDataStore for InMemoryBoardDataStore {
    fn kind(&self) -> DataStoreKind {
        DataStoreKind::InMemory
    }

    async fn create_board(&self, board: &Board) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.boards.contains_key(&board.id) {
            return Err(AppError::conflict(
                "Board already exists",
                json!({ "board_id": board.id }),
            ));
        }
        state.boards.insert(board.id, board.clone());
        Ok(())
    }

    async fn board(&self, board_id: Uuid) -> Result<Option<Board>, AppError> {
        Ok(self.state.read().await.boards.get(&board_id).cloned())
    }

    async fn boards_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError> {
        let state = self.state.read().await;
        let mut boards: Vec<Board> = state
            .boards
            .values()
            .filter(|b| b.is_member(user_id))
            .cloned()
            .collect();
        boards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(boards)
    }

    async fn modify_board(
        &self,
        board_id: Uuid,
        mutation: BoardMutation,
    ) -> Result<Board, AppError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.boards.get_mut(&board_id) else {
            return Err(AppError::not_found(
                "Board not found",
                json!({ "board_id": board_id }),
            ));
        };

        let mut board = stored.clone();
        mutation(&mut board)?;
        *stored = board.clone();
        Ok(board)
    }

    async fn delete_board(&self, board_id: Uuid) -> Result<bool, AppError> {
        let mut state = self.state.write().await;
        state.invites.remove(&board_id);
        Ok(state.boards.remove(&board_id).is_some())
    }

    async fn create_invite(&self, invite: &Invite) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if !state.boards.contains_key(&invite.board_id) {
            return Err(AppError::not_found(
                "Board not found",
                json!({ "board_id": invite.board_id }),
            ));
        }
        state
            .invites
            .entry(invite.board_id)
            .or_default()
            .push(invite.clone());
        Ok(())
    }

    async fn invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<Option<Invite>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .invites
            .get(&board_id)
            .and_then(|invites| invites.iter().find(|i| i.id == invite_id))
            .cloned())
    }

    async fn invites(&self, board_id: Uuid) -> Result<Vec<Invite>, AppError> {
        let state = self.state.read().await;
        Ok(state.invites.get(&board_id).cloned().unwrap_or_default())
    }

    async fn delete_invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<bool, AppError> {
        let mut state = self.state.write().await;
        let Some(invites) = state.invites.get_mut(&board_id) else {
            return Ok(false);
        };
        let before = invites.len();
        invites.retain(|i| i.id != invite_id);
        Ok(invites.len() != before)
    }
}
