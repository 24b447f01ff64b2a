// Request/Response shapes exchanged with the transport layer
//
// Plain data. Field presence is validated by the transport before the
// service is called.

use super::todo::{Todo, TodoId};
use serde::{Deserialize, Serialize};

/// todo.create - Create a TODO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

/// todo.read - Page through TODOs, most recent first
///
/// `prev_id == 0` starts from the newest item; otherwise only items with
/// `id < prev_id` are returned. `size == 0` selects the default page size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadTodoRequest {
    #[serde(default)]
    pub prev_id: TodoId,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

/// todo.update - Replace subject/description of an existing TODO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: TodoId,
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

/// todo.delete - Remove a set of TODOs in one statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoRequest {
    pub ids: Vec<TodoId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTodoResponse {}
