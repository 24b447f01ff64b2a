// TODO Service - the four persistence use cases

pub mod constants;
pub mod paging;

pub use paging::Page;

use crate::context::Context;
use crate::domain::{Todo, TodoId};
use crate::error::Result;
use crate::port::TodoRepository;
use constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use std::sync::Arc;

/// Tunables for the service
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// TODO Service
///
/// Stateless apart from the injected repository. Every call hands the
/// caller's `Context` to the repository, which decides where a unit of
/// work may still be abandoned. Failures are returned, never retried or logged.
#[derive(Clone)]
pub struct TodoService {
    todo_repo: Arc<dyn TodoRepository>,
    config: ServiceConfig,
}

impl TodoService {
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self::with_config(todo_repo, ServiceConfig::default())
    }

    pub fn with_config(todo_repo: Arc<dyn TodoRepository>, config: ServiceConfig) -> Self {
        Self { todo_repo, config }
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    /// Create a TODO; the store assigns id and both timestamps
    pub async fn create(&self, ctx: &Context, subject: &str, description: &str) -> Result<Todo> {
        self.todo_repo.create(ctx, subject, description).await
    }

    /// Read one page of TODOs, most recent first
    ///
    /// # Arguments
    ///
    /// * `prev_id` - exclusive cursor; `0` starts from the newest item
    /// * `size` - page size; `0` selects `ServiceConfig::default_page_size`
    pub async fn read(&self, ctx: &Context, prev_id: TodoId, size: u32) -> Result<Vec<Todo>> {
        let page = Page::resolve(
            prev_id,
            size,
            self.config.default_page_size,
            self.config.max_page_size,
        );

        self.todo_repo.find_page(ctx, page.before, page.limit).await
    }

    /// Update subject/description of an existing TODO
    pub async fn update(
        &self,
        ctx: &Context,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo> {
        self.todo_repo.update(ctx, id, subject, description).await
    }

    /// Delete a set of TODOs; unknown ids are ignored, an empty set is a no-op
    pub async fn delete(&self, ctx: &Context, ids: &[TodoId]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.todo_repo.delete(ctx, ids).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::cancel_pair;
    use crate::error::AppError;
    use crate::port::todo_repository::mocks::InMemoryTodoRepository;

    fn service() -> (TodoService, Arc<InMemoryTodoRepository>) {
        let repo = Arc::new(InMemoryTodoRepository::new());
        (TodoService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_read_zero_size_uses_default_page() {
        let (svc, _repo) = service();
        let ctx = Context::background();
        for i in 0..(DEFAULT_PAGE_SIZE + 5) {
            svc.create(&ctx, &format!("todo {}", i), "").await.unwrap();
        }

        let page = svc.read(&ctx, 0, 0).await.unwrap();
        assert_eq!(page.len(), DEFAULT_PAGE_SIZE as usize);
        assert_eq!(page[0].id, (DEFAULT_PAGE_SIZE + 5) as i64);
    }

    #[tokio::test]
    async fn test_custom_page_config() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let svc = TodoService::with_config(
            repo,
            ServiceConfig {
                default_page_size: 2,
                max_page_size: 3,
            },
        );
        let ctx = Context::background();
        for i in 0..5 {
            svc.create(&ctx, &format!("todo {}", i), "").await.unwrap();
        }

        assert_eq!(svc.read(&ctx, 0, 0).await.unwrap().len(), 2);
        assert_eq!(svc.read(&ctx, 0, 50).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_delete_never_reaches_store() {
        let (svc, repo) = service();
        repo.fail_with("store is down").await;

        tokio_test::assert_ok!(svc.delete(&Context::background(), &[]).await);
    }

    #[tokio::test]
    async fn test_store_failure_is_surfaced() {
        let (svc, repo) = service();
        repo.fail_with("disk I/O error").await;

        let err = svc
            .create(&Context::background(), "Buy milk", "2%")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (svc, _repo) = service();
        let err = svc
            .update(&Context::background(), 99, "x", "y")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_cancelled_context_leaves_store_untouched() {
        let (svc, repo) = service();
        let (handle, ctx) = cancel_pair();
        handle.cancel();

        let err = svc.create(&ctx, "Buy milk", "").await.unwrap_err();
        assert!(matches!(err, AppError::Cancelled(_)));
        assert!(repo.is_empty().await);
    }
}
