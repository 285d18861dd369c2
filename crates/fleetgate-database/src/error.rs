//! Store failure categorization.
//!
//! Raw sqlx errors never cross the API boundary. Every repository maps
//! driver failures through [`store_error`], which picks a coarse category
//! (connection / permission / authentication / unknown), logs the raw
//! detail, and returns an [`AppError`] carrying only the generic user-safe
//! message for that category.

use fleetgate_core::error::{AppError, StoreFailureCategory};

/// PostgreSQL SQLSTATE class for invalid authorization specification.
const SQLSTATE_INVALID_AUTHORIZATION: &str = "28";
/// PostgreSQL SQLSTATE for insufficient privilege.
const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Categorize and wrap a sqlx error.
///
/// `context` names the failed operation for the logs only.
pub fn store_error(context: &'static str, err: sqlx::Error) -> AppError {
    let category = categorize(&err);
    tracing::error!(
        context,
        category = %category,
        error = %err,
        "store operation failed"
    );
    AppError::store_failure(category, err)
}

fn categorize(err: &sqlx::Error) -> StoreFailureCategory {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreFailureCategory::Connection,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(code) if code.starts_with(SQLSTATE_INVALID_AUTHORIZATION) => {
                StoreFailureCategory::Authentication
            }
            Some(SQLSTATE_INSUFFICIENT_PRIVILEGE) => StoreFailureCategory::Permission,
            _ => StoreFailureCategory::Unknown,
        },
        _ => StoreFailureCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_connection_failures() {
        let err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert_eq!(categorize(&err), StoreFailureCategory::Connection);
    }

    #[test]
    fn row_not_found_is_unknown() {
        assert_eq!(
            categorize(&sqlx::Error::RowNotFound),
            StoreFailureCategory::Unknown
        );
    }
}
