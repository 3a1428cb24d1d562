//! Authorization policy interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Action;
use crate::error::AppError;

/// Answers allow/deny for a caller performing an action on a board.
///
/// # Implementations
///
/// - [`crate::infrastructure::authorization::DefaultAuthorizationStore`] - role table over a datastore
/// - [`crate::infrastructure::authorization::PermissiveAuthorizationStore`] - allows everything
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    /// # Errors
    ///
    /// May return [`AppError::NotFound`] if the board does not exist.
    async fn authorize(&self, user_id: &str, board_id: Uuid, action: Action)
    -> Result<bool, AppError>;
}
