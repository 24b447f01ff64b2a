// Domain Layer - The TODO entity and the request/response shapes around it

pub mod message;
pub mod todo;

// Re-exports
pub use message::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ReadTodoRequest, ReadTodoResponse, UpdateTodoRequest, UpdateTodoResponse,
};
pub use todo::{Todo, TodoId};
