// Application Layer - Use Cases

pub mod todo;

// Re-exports
pub use todo::{ServiceConfig, TodoService};
