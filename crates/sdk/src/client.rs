//! TODO Client Implementation

use crate::error::{Result, SdkError};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;
use todo_core::domain::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ReadTodoRequest, ReadTodoResponse, Todo, TodoId, UpdateTodoRequest, UpdateTodoResponse,
};

/// Method names served by the daemon (mirrors `todo_api_rpc::types`)
pub mod method {
    pub const CREATE: &str = "todo.create.v1";
    pub const READ: &str = "todo.read.v1";
    pub const UPDATE: &str = "todo.update.v1";
    pub const DELETE: &str = "todo.delete.v1";
}

/// TODO daemon client
///
/// # Example
///
/// ```no_run
/// use todo_sdk::TodoClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TodoClient::connect("http://127.0.0.1:9530").await?;
/// # Ok(())
/// # }
/// ```
pub struct TodoClient {
    client: HttpClient,
}

impl TodoClient {
    /// Connect to the TODO daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9530`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a TODO
    pub async fn create(
        &self,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Todo> {
        let request = CreateTodoRequest {
            subject: subject.into(),
            description: description.into(),
        };
        let response: CreateTodoResponse = self
            .client
            .request(method::CREATE, rpc_params![request])
            .await?;

        Ok(response.todo)
    }

    /// Read a page of TODOs, most recent first
    ///
    /// # Arguments
    ///
    /// * `prev_id` - smallest id of the previous page, or `0` for the first page
    /// * `size` - page size, or `0` for the server default
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use todo_sdk::TodoClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = TodoClient::connect("http://127.0.0.1:9530").await?;
    /// let mut cursor = 0;
    /// loop {
    ///     let page = client.read(cursor, 50).await?;
    ///     let Some(last) = page.last() else { break };
    ///     cursor = last.id;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read(&self, prev_id: TodoId, size: u32) -> Result<Vec<Todo>> {
        let request = ReadTodoRequest { prev_id, size };
        let response: ReadTodoResponse = self
            .client
            .request(method::READ, rpc_params![request])
            .await?;

        Ok(response.todos)
    }

    /// Update subject/description of an existing TODO
    ///
    /// Fails with an error for which `SdkError::is_not_found` is true when
    /// `id` does not exist.
    pub async fn update(
        &self,
        id: TodoId,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Todo> {
        let request = UpdateTodoRequest {
            id,
            subject: subject.into(),
            description: description.into(),
        };
        let response: UpdateTodoResponse = self
            .client
            .request(method::UPDATE, rpc_params![request])
            .await?;

        Ok(response.todo)
    }

    /// Delete TODOs by id; unknown ids are ignored
    pub async fn delete(&self, ids: impl Into<Vec<TodoId>>) -> Result<()> {
        let request = DeleteTodoRequest { ids: ids.into() };
        let _: DeleteTodoResponse = self
            .client
            .request(method::DELETE, rpc_params![request])
            .await?;

        Ok(())
    }
}
