//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies carry only what the path does not; identifiers come from
//! the route and the caller from the user header.

pub mod board;
pub mod health;
pub mod invite;
