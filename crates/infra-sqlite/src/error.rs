// sqlx::Error -> AppError mapping

use todo_core::error::AppError;

/// Convert sqlx::Error to AppError::Store with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => AppError::Store(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "1299" => AppError::Store(format!(
                        "NOT NULL constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "275" => AppError::Store(format!(
                        "CHECK constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Store(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => AppError::Store(format!("Database full: {}", db_err.message())),
                    _ => AppError::Store(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Store(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Store("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => AppError::Store(format!("Column not found: {}", col)),
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Store(format!("Cannot decode column {}: {}", index, source))
        }
        sqlx::Error::PoolTimedOut => {
            AppError::Store("Timed out waiting for a pooled connection".to_string())
        }
        sqlx::Error::PoolClosed => AppError::Store("Connection pool is closed".to_string()),
        _ => {
            // Connection, protocol, configuration errors
            AppError::Store(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sqlx_error_is_a_store_failure() {
        assert!(map_sqlx_error(sqlx::Error::RowNotFound).is_store_failure());
        assert!(map_sqlx_error(sqlx::Error::PoolTimedOut).is_store_failure());
        assert!(map_sqlx_error(sqlx::Error::PoolClosed).is_store_failure());
        assert!(map_sqlx_error(sqlx::Error::ColumnNotFound("subject".into())).is_store_failure());
    }

    #[test]
    fn test_row_not_found_is_not_a_not_found_error() {
        // A missing row at this layer means an inconsistent store, not a
        // caller-facing "not found"
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(!err.is_not_found());
    }
}
