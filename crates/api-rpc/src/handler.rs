//! RPC Method Handlers
//!
//! Field-presence validation lives here, not in the service.

use crate::error::to_rpc_error;
use crate::types::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    ReadTodoRequest, ReadTodoResponse, UpdateTodoRequest, UpdateTodoResponse, METHOD_CREATE,
    METHOD_DELETE, METHOD_READ, METHOD_UPDATE,
};
use jsonrpsee::types::ErrorObjectOwned;
use std::time::Duration;
use todo_core::application::TodoService;
use todo_core::error::AppError;
use todo_core::Context;
use tracing::warn;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: TodoService,
    request_timeout: Duration,
}

impl RpcHandler {
    pub fn new(service: TodoService, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    /// todo.create.v1
    pub async fn create(
        &self,
        params: CreateTodoRequest,
    ) -> Result<CreateTodoResponse, ErrorObjectOwned> {
        require_subject(&params.subject).map_err(|e| fail(METHOD_CREATE, e))?;

        let todo = self
            .service
            .create(&self.context(), &params.subject, &params.description)
            .await
            .map_err(|e| fail(METHOD_CREATE, e))?;

        Ok(CreateTodoResponse { todo })
    }

    /// todo.read.v1
    pub async fn read(&self, params: ReadTodoRequest) -> Result<ReadTodoResponse, ErrorObjectOwned> {
        let todos = self
            .service
            .read(&self.context(), params.prev_id, params.size)
            .await
            .map_err(|e| fail(METHOD_READ, e))?;

        Ok(ReadTodoResponse { todos })
    }

    /// todo.update.v1
    pub async fn update(
        &self,
        params: UpdateTodoRequest,
    ) -> Result<UpdateTodoResponse, ErrorObjectOwned> {
        require_subject(&params.subject).map_err(|e| fail(METHOD_UPDATE, e))?;

        let todo = self
            .service
            .update(
                &self.context(),
                params.id,
                &params.subject,
                &params.description,
            )
            .await
            .map_err(|e| fail(METHOD_UPDATE, e))?;

        Ok(UpdateTodoResponse { todo })
    }

    /// todo.delete.v1
    pub async fn delete(
        &self,
        params: DeleteTodoRequest,
    ) -> Result<DeleteTodoResponse, ErrorObjectOwned> {
        if params.ids.is_empty() {
            return Err(fail(
                METHOD_DELETE,
                AppError::Validation("ids must not be empty".to_string()),
            ));
        }

        self.service
            .delete(&self.context(), &params.ids)
            .await
            .map_err(|e| fail(METHOD_DELETE, e))?;

        Ok(DeleteTodoResponse {})
    }

    fn context(&self) -> Context {
        Context::with_timeout(self.request_timeout)
    }
}

fn require_subject(subject: &str) -> Result<(), AppError> {
    if subject.trim().is_empty() {
        return Err(AppError::Validation("subject is required".to_string()));
    }
    Ok(())
}

fn fail(method: &str, err: AppError) -> ErrorObjectOwned {
    warn!(method, error = %err, "RPC call failed");
    to_rpc_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use std::sync::Arc;
    use tokio_test::assert_err;
    use todo_core::port::todo_repository::mocks::InMemoryTodoRepository;

    fn handler() -> (RpcHandler, Arc<InMemoryTodoRepository>) {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let service = TodoService::new(repo.clone());
        (RpcHandler::new(service, Duration::from_secs(5)), repo)
    }

    #[tokio::test]
    async fn test_create_rejects_blank_subject() {
        let (handler, repo) = handler();

        let err = handler
            .create(CreateTodoRequest {
                subject: "   ".to_string(),
                description: "x".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), code::VALIDATION_ERROR);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_unknown_id_maps_to_not_found() {
        let (handler, _repo) = handler();

        let err = handler
            .update(UpdateTodoRequest {
                id: 404,
                subject: "Buy milk".to_string(),
                description: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), code::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_rejects_empty_ids() {
        let (handler, _repo) = handler();

        let err = assert_err!(handler.delete(DeleteTodoRequest { ids: vec![] }).await);
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let (handler, _repo) = handler();

        let created = handler
            .create(CreateTodoRequest {
                subject: "Walk dog".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();

        let page = handler.read(ReadTodoRequest::default()).await.unwrap();
        assert_eq!(page.todos, vec![created.todo]);
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_store_code() {
        let (handler, repo) = handler();
        repo.fail_with("database is locked").await;

        let err = handler.read(ReadTodoRequest::default()).await.unwrap_err();
        assert_eq!(err.code(), code::STORE_ERROR);
    }
}
