// TODO Infrastructure - SQLite Adapter
// Implements: TodoRepository

mod connection;
mod error;
mod schema;
mod todo_repository;

pub use connection::{create_pool, create_pool_with, PoolSettings};
pub use schema::ensure_schema;
pub use todo_repository::SqliteTodoRepository;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
