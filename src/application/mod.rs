//! Application layer: the board service facade and its request types.
//!
//! - [`services::BoardApplicationService`] - the eleven board operations
//! - [`requests`] - typed requests and the caller [`requests::RequestContext`]

pub mod requests;
pub mod services;
