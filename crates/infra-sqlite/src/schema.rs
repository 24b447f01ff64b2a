// Schema Bootstrap
//
// One fixed, idempotent DDL file. There is no version table and no
// down path.

use crate::error::map_sqlx_error;
use sqlx::SqlitePool;
use todo_core::error::Result;
use tracing::info;

const TODOS_DDL: &str = include_str!("../schema/todos.sql");

/// Create the `todos` table if it does not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    info!("Ensuring TODO schema...");

    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    for statement in statements(TODOS_DDL) {
        sqlx::query(&statement)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
    }

    tx.commit().await.map_err(map_sqlx_error)?;

    info!("TODO schema ready");
    Ok(())
}

/// Split a SQL file into statements, dropping `--` comment lines
fn statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|statement| {
            statement
                .lines()
                .filter(|line| !line.trim().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}
