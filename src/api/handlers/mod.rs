//! HTTP handlers, one per board operation.
//!
//! Every handler builds an [`crate::endpoint::EndpointRequest`] and calls the
//! matching decorated endpoint, so middleware runs for HTTP and in-process
//! callers alike.

pub mod boards;
pub mod health;
pub mod invites;
pub mod users;

pub use boards::{
    create_board_handler, delete_board_handler, edit_board_handler, get_board_handler,
    get_boards_handler,
};
pub use health::health_handler;
pub use invites::{
    create_invite_handler, delete_invite_handler, get_invites_handler, respond_to_invite_handler,
};
pub use users::{edit_board_user_handler, remove_user_handler};
