//! RPC Request/Response Types
//!
//! The wire shapes are the core message types; this module pins each one
//! to its method name.

pub use todo_core::domain::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ReadTodoRequest, ReadTodoResponse, UpdateTodoRequest, UpdateTodoResponse,
};

/// todo.create.v1 - CreateTodoRequest -> CreateTodoResponse
pub const METHOD_CREATE: &str = "todo.create.v1";

/// todo.read.v1 - ReadTodoRequest -> ReadTodoResponse
pub const METHOD_READ: &str = "todo.read.v1";

/// todo.update.v1 - UpdateTodoRequest -> UpdateTodoResponse
pub const METHOD_UPDATE: &str = "todo.update.v1";

/// todo.delete.v1 - DeleteTodoRequest -> DeleteTodoResponse
pub const METHOD_DELETE: &str = "todo.delete.v1";
