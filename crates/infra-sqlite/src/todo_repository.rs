// SQLite TodoRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::collections::BTreeSet;
use todo_core::domain::{Todo, TodoId};
use todo_core::error::{AppError, Result};
use todo_core::port::TodoRepository;
use todo_core::Context;

const INSERT_SQL: &str = "INSERT INTO todos (subject, description) VALUES (?, ?)";

const SELECT_BY_ID_SQL: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?";

const READ_SQL: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos ORDER BY id DESC LIMIT ?";

const READ_BEFORE_SQL: &str = "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id < ? ORDER BY id DESC LIMIT ?";

const UPDATE_SQL: &str = r#"
    UPDATE todos
    SET subject = ?, description = ?, updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
    WHERE id = ?
"#;

/// Ids bound per DELETE statement (below SQLite's bind-parameter limit)
const DELETE_CHUNK_SIZE: usize = 500;

pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, ctx: &Context, subject: &str, description: &str) -> Result<Todo> {
        // Insert + confirm form one unit; dropping `tx` on any early return rolls back
        let (tx, todo) = ctx
            .run("create", async {
                let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

                let result = sqlx::query(INSERT_SQL)
                    .bind(subject)
                    .bind(description)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx_error)?;

                let todo = confirm(&mut tx, result.last_insert_rowid()).await?;
                Ok((tx, todo))
            })
            .await?;

        commit(ctx, "create", tx).await?;
        Ok(todo)
    }

    async fn find_by_id(&self, ctx: &Context, id: TodoId) -> Result<Option<Todo>> {
        ctx.run("find_by_id", async {
            let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
            fetch_by_id(&mut conn, id).await
        })
        .await
    }

    async fn find_page(
        &self,
        ctx: &Context,
        prev_id: Option<TodoId>,
        limit: u32,
    ) -> Result<Vec<Todo>> {
        let rows = ctx
            .run("read", async {
                match prev_id {
                    Some(prev_id) => {
                        sqlx::query_as::<_, TodoRow>(READ_BEFORE_SQL)
                            .bind(prev_id)
                            .bind(i64::from(limit))
                            .fetch_all(&self.pool)
                            .await
                    }
                    None => {
                        sqlx::query_as::<_, TodoRow>(READ_SQL)
                            .bind(i64::from(limit))
                            .fetch_all(&self.pool)
                            .await
                    }
                }
                .map_err(map_sqlx_error)
            })
            .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn update(
        &self,
        ctx: &Context,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo> {
        let (tx, todo) = ctx
            .run("update", async {
                let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

                let result = sqlx::query(UPDATE_SQL)
                    .bind(subject)
                    .bind(description)
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx_error)?;

                // Zero rows is not a store failure: the id simply does not exist
                if result.rows_affected() == 0 {
                    tx.rollback().await.map_err(map_sqlx_error)?;
                    return Err(AppError::NotFound(format!("TODO {} not found", id)));
                }

                let todo = confirm(&mut tx, id).await?;
                Ok((tx, todo))
            })
            .await?;

        commit(ctx, "update", tx).await?;
        Ok(todo)
    }

    async fn delete(&self, ctx: &Context, ids: &[TodoId]) -> Result<u64> {
        let ids: Vec<TodoId> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if ids.is_empty() {
            return Ok(0);
        }

        // All chunks commit together or not at all
        let (tx, removed) = ctx
            .run("delete", async {
                let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
                let mut removed = 0;

                for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
                    removed += delete_query(chunk)
                        .build()
                        .execute(&mut *tx)
                        .await
                        .map_err(map_sqlx_error)?
                        .rows_affected();
                }
                Ok((tx, removed))
            })
            .await?;

        commit(ctx, "delete", tx).await?;
        Ok(removed)
    }
}

/// Last cancellation point of a unit of work.
///
/// Everything before COMMIT runs under `ctx.run`; a dropped statement
/// future leaves `tx` to roll back. COMMIT itself is never raced: once
/// issued it runs to completion and its real outcome is returned, so a
/// cancelled call never leaves its write behind.
async fn commit(ctx: &Context, op: &str, tx: Transaction<'static, Sqlite>) -> Result<()> {
    ctx.check(op)?;
    tx.commit().await.map_err(map_sqlx_error)
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: TodoId) -> Result<Option<Todo>> {
    let row = sqlx::query_as::<_, TodoRow>(SELECT_BY_ID_SQL)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

    Ok(row.map(TodoRow::into_todo))
}

/// Read-after-write: re-read the row the caller just wrote
async fn confirm(conn: &mut SqliteConnection, id: TodoId) -> Result<Todo> {
    fetch_by_id(conn, id).await?.ok_or_else(|| {
        AppError::Store(format!(
            "TODO {} missing right after write (inconsistent store)",
            id
        ))
    })
}

/// `DELETE ... WHERE id IN (?, ?, ...)` with exactly one placeholder per id
fn delete_query(ids: &[TodoId]) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("DELETE FROM todos WHERE id IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
    builder
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    subject: String,
    description: String,
    created_at: NaiveDateTime, // UTC, millisecond text
    updated_at: NaiveDateTime,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            subject: self.subject,
            description: self.description,
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
        }
    }
}
