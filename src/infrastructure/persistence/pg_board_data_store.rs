//! PostgreSQL implementation of the board datastore.
//!
//! Boards and invites are stored as JSONB documents next to a few indexed
//! key columns. Membership queries use JSONB containment on `doc->'users'`.
//! Schema lives in `migrations/`.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Board, Invite};
use crate::domain::repositories::{BoardDataStore, BoardMutation, DataStoreKind};
use crate::error::AppError;

/// Durable datastore on top of a shared connection pool.
pub struct PgBoardDataStore {
    pool: PgPool,
}

impl PgBoardDataStore {
    /// Creates a datastore over an existing pool. Does not touch the database.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BoardDataStore for PgBoardDataStore {
    fn kind(&self) -> DataStoreKind {
        DataStoreKind::Postgres
    }

    async fn create_board(&self, board: &Board) -> Result<(), AppError> {
        sqlx::query("INSERT INTO boards (id, created_at, doc) VALUES ($1, $2, $3)")
            .bind(board.id)
            .bind(board.created_at)
            .bind(Json(board))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn board(&self, board_id: Uuid) -> Result<Option<Board>, AppError> {
        let row: Option<(Json<Board>,)> = sqlx::query_as("SELECT doc FROM boards WHERE id = $1")
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(Json(board),)| board))
    }

    async fn boards_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError> {
        let membership = json!([{ "user_id": user_id }]);
        let rows: Vec<(Json<Board>,)> = sqlx::query_as(
            r#"
            SELECT doc FROM boards
            WHERE doc->'users' @> $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(Json(membership))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(Json(board),)| board).collect())
    }

    async fn modify_board(
        &self,
        board_id: Uuid,
        mutation: BoardMutation,
    ) -> Result<Board, AppError> {
        let mut tx = self.pool.begin().await?;

        // Row lock serialises concurrent modifications of the same board.
        let row: Option<(Json<Board>,)> =
            sqlx::query_as("SELECT doc FROM boards WHERE id = $1 FOR UPDATE")
                .bind(board_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((Json(mut board),)) = row else {
            return Err(AppError::not_found(
                "Board not found",
                json!({ "board_id": board_id }),
            ));
        };

        mutation(&mut board)?;

        sqlx::query("UPDATE boards SET doc = $2 WHERE id = $1")
            .bind(board_id)
            .bind(Json(&board))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(board)
    }

    async fn delete_board(&self, board_id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM invites WHERE board_id = $1")
            .bind(board_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(board_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_invite(&self, invite: &Invite) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO invites (id, board_id, created_at, doc)
            SELECT $1, $2, $3, $4
            WHERE EXISTS (SELECT 1 FROM boards WHERE id = $2)
            "#,
        )
        .bind(invite.id)
        .bind(invite.board_id)
        .bind(invite.created_at)
        .bind(Json(invite))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Board not found",
                json!({ "board_id": invite.board_id }),
            ));
        }
        Ok(())
    }

    async fn invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<Option<Invite>, AppError> {
        let row: Option<(Json<Invite>,)> =
            sqlx::query_as("SELECT doc FROM invites WHERE board_id = $1 AND id = $2")
                .bind(board_id)
                .bind(invite_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(Json(invite),)| invite))
    }

    async fn invites(&self, board_id: Uuid) -> Result<Vec<Invite>, AppError> {
        let rows: Vec<(Json<Invite>,)> = sqlx::query_as(
            "SELECT doc FROM invites WHERE board_id = $1 ORDER BY created_at ASC",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(Json(invite),)| invite).collect())
    }

    async fn delete_invite(&self, board_id: Uuid, invite_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invites WHERE board_id = $1 AND id = $2")
            .bind(board_id)
            .bind(invite_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
