// Port Layer - Interfaces for external dependencies

pub mod todo_repository;

// Re-exports
pub use todo_repository::TodoRepository;
