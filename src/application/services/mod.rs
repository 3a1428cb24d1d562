//! Business logic services for the application layer.

pub mod board_service;

pub use board_service::BoardApplicationService;
