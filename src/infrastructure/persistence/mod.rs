//! Board datastore implementations.
//!
//! - [`InMemoryBoardDataStore`] - ephemeral, process-local
//! - [`PgBoardDataStore`] - durable, PostgreSQL JSONB documents

pub mod inmem_board_data_store;
pub mod pg_board_data_store;

pub use inmem_board_data_store::InMemoryBoardDataStore;
pub use pg_board_data_store::PgBoardDataStore;
