//! Route table for the boards endpoints.

use axum::{
    Router,
    http::HeaderName,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    create_board_handler, create_invite_handler, delete_board_handler, delete_invite_handler,
    edit_board_handler, edit_board_user_handler, get_board_handler, get_boards_handler,
    get_invites_handler, health_handler, remove_user_handler, respond_to_invite_handler,
};
use crate::api::middleware;
use crate::domain::repositories::BoardDataStore;
use crate::endpoint::EndpointSet;

/// Header carrying the caller's user id unless overridden.
pub const DEFAULT_USER_HEADER: &str = "x-user-id";

/// Transport-level options accepted by [`register_http_handlers`].
#[derive(Debug, Clone)]
pub enum ServerOption {
    /// Read the caller identity from this header instead of `x-user-id`.
    UserHeader(HeaderName),
    /// Wrap the board routes in a request tracing layer.
    Tracing,
}

/// State shared by the board handlers.
#[derive(Clone)]
pub struct HttpState {
    pub endpoints: EndpointSet,
    pub user_header: HeaderName,
}

/// Mounts every board operation on `router`.
///
/// # Endpoints
///
/// - `POST   /boards`                                - createBoard
/// - `GET    /boards`                                - getBoards
/// - `GET    /boards/{board_id}`                     - getBoard
/// - `PATCH  /boards/{board_id}`                     - editBoard
/// - `DELETE /boards/{board_id}`                     - deleteBoard
/// - `POST   /boards/{board_id}/invites`             - createInvite
/// - `GET    /boards/{board_id}/invites`             - getInvites
/// - `POST   /boards/{board_id}/invites/{invite_id}` - respondToInvite
/// - `DELETE /boards/{board_id}/invites/{invite_id}` - deleteInvite
/// - `DELETE /boards/{board_id}/users/{user_id}`     - removeUser
/// - `PATCH  /boards/{board_id}/users/{user_id}`     - editBoardUser
pub fn register_http_handlers(
    router: Router,
    endpoints: EndpointSet,
    options: &[ServerOption],
) -> Router {
    let mut user_header = HeaderName::from_static(DEFAULT_USER_HEADER);
    let mut tracing = false;
    for option in options {
        match option {
            ServerOption::UserHeader(name) => user_header = name.clone(),
            ServerOption::Tracing => tracing = true,
        }
    }

    let routes = board_routes().with_state(HttpState {
        endpoints,
        user_header,
    });
    let routes = if tracing {
        routes.layer(middleware::tracing::layer())
    } else {
        routes
    };

    router.merge(routes)
}

fn board_routes() -> Router<HttpState> {
    Router::new()
        .route("/boards", post(create_board_handler).get(get_boards_handler))
        .route(
            "/boards/{board_id}",
            get(get_board_handler)
                .patch(edit_board_handler)
                .delete(delete_board_handler),
        )
        .route(
            "/boards/{board_id}/invites",
            post(create_invite_handler).get(get_invites_handler),
        )
        .route(
            "/boards/{board_id}/invites/{invite_id}",
            post(respond_to_invite_handler).delete(delete_invite_handler),
        )
        .route(
            "/boards/{board_id}/users/{user_id}",
            patch(edit_board_user_handler).delete(remove_user_handler),
        )
}

/// `GET /health`, probing the given datastore.
pub fn health_routes(data_store: Arc<dyn BoardDataStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(data_store)
}
