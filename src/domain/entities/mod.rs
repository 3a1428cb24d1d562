//! Core domain entities of the boards service.
//!
//! - [`Board`] - a board and its member list
//! - [`Invite`] - a pending membership offer
//! - [`Role`] / [`Action`] - membership roles and the permissions they grant

pub mod board;
pub mod invite;
pub mod role;

pub use board::{Board, BoardUser};
pub use invite::{INVITE_TTL_DAYS, Invite, InviteResponse};
pub use role::{Action, Role};
