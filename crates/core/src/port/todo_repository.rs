// TODO Repository Port (Interface)

use crate::context::Context;
use crate::domain::{Todo, TodoId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for TODO persistence
///
/// Implementations own statement lifecycle and row mapping. They never
/// retry and never log; every failure comes back as an `AppError`.
///
/// Every call is bound to `ctx`. A write that reports `Cancelled` or
/// `DeadlineExceeded` must not have been committed.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a TODO and return it as persisted (read-after-write)
    async fn create(&self, ctx: &Context, subject: &str, description: &str) -> Result<Todo>;

    /// Find TODO by ID
    async fn find_by_id(&self, ctx: &Context, id: TodoId) -> Result<Option<Todo>>;

    /// Up to `limit` TODOs ordered by id descending.
    /// `prev_id = Some(p)` restricts the page to `id < p`.
    async fn find_page(
        &self,
        ctx: &Context,
        prev_id: Option<TodoId>,
        limit: u32,
    ) -> Result<Vec<Todo>>;

    /// Update subject/description; `AppError::NotFound` if `id` does not exist
    async fn update(
        &self,
        ctx: &Context,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo>;

    /// Delete every row whose id is in `ids` as one unit.
    /// Returns the number of rows removed.
    async fn delete(&self, ctx: &Context, ids: &[TodoId]) -> Result<u64>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<TodoId, Todo>,
        last_id: TodoId,
        fail_with: Option<String>,
    }

    /// In-memory TodoRepository for testing
    #[derive(Default)]
    pub struct InMemoryTodoRepository {
        state: Mutex<State>,
    }

    impl InMemoryTodoRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent call fail with `AppError::Store(message)`
        pub async fn fail_with(&self, message: impl Into<String>) {
            self.state.lock().await.fail_with = Some(message.into());
        }

        pub async fn len(&self) -> usize {
            self.state.lock().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        fn check(ctx: &Context, op: &str, state: &State) -> Result<()> {
            ctx.check(op)?;
            match &state.fail_with {
                Some(msg) => Err(AppError::Store(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl TodoRepository for InMemoryTodoRepository {
        async fn create(&self, ctx: &Context, subject: &str, description: &str) -> Result<Todo> {
            let mut state = self.state.lock().await;
            Self::check(ctx, "create", &state)?;

            state.last_id += 1;
            let now = Utc::now();
            let todo = Todo {
                id: state.last_id,
                subject: subject.to_string(),
                description: description.to_string(),
                created_at: now,
                updated_at: now,
            };
            state.rows.insert(todo.id, todo.clone());
            Ok(todo)
        }

        async fn find_by_id(&self, ctx: &Context, id: TodoId) -> Result<Option<Todo>> {
            let state = self.state.lock().await;
            Self::check(ctx, "find_by_id", &state)?;
            Ok(state.rows.get(&id).cloned())
        }

        async fn find_page(
            &self,
            ctx: &Context,
            prev_id: Option<TodoId>,
            limit: u32,
        ) -> Result<Vec<Todo>> {
            let state = self.state.lock().await;
            Self::check(ctx, "read", &state)?;
            Ok(state
                .rows
                .values()
                .rev()
                .filter(|t| prev_id.map_or(true, |p| t.id < p))
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn update(
            &self,
            ctx: &Context,
            id: TodoId,
            subject: &str,
            description: &str,
        ) -> Result<Todo> {
            let mut state = self.state.lock().await;
            Self::check(ctx, "update", &state)?;

            let todo = state
                .rows
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("TODO {} not found", id)))?;
            todo.subject = subject.to_string();
            todo.description = description.to_string();
            todo.updated_at = Utc::now().max(todo.created_at);
            Ok(todo.clone())
        }

        async fn delete(&self, ctx: &Context, ids: &[TodoId]) -> Result<u64> {
            let mut state = self.state.lock().await;
            Self::check(ctx, "delete", &state)?;

            let mut removed = 0;
            for id in ids {
                if state.rows.remove(id).is_some() {
                    removed += 1;
                }
            }
            Ok(removed)
        }
    }
}
