use domain::DomainError;
use sea_orm::{DbErr, RuntimeErr};

/// SQLSTATE class 23: integrity constraint violation
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DomainError::Connection(err.to_string()),
        sqlx::Error::Database(db_err)
            if db_err
                .code()
                .is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS)) =>
        {
            DomainError::ConstraintViolation(db_err.message().to_string())
        }
        _ => DomainError::Query(err.to_string()),
    }
}

/// sea-orm errors carrying a driver error are classified like raw sqlx ones,
/// so every SQLSTATE class 23 failure becomes a constraint violation.
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => DomainError::Connection(err.to_string()),
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
            map_sqlx_error(e)
        }
        other => DomainError::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;

    /// Database error as Postgres would report it, with a fixed SQLSTATE
    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
    }

    impl std::fmt::Display for PgFailure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "SQLSTATE {}", self.code)
        }
    }

    impl StdError for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            "constraint check failed"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                "23502" => ErrorKind::NotNullViolation,
                "23514" => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn pg_failure(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgFailure { code }))
    }

    #[test]
    fn test_integrity_class_is_constraint_violation() {
        for code in ["23505", "23502", "23514"] {
            assert!(matches!(
                map_sqlx_error(pg_failure(code)),
                DomainError::ConstraintViolation(_)
            ));
        }
        assert!(matches!(
            map_sqlx_error(pg_failure("42601")),
            DomainError::Query(_)
        ));
    }

    #[test]
    fn test_sea_orm_not_null_and_check_violations_are_constraint_violations() {
        let not_null = DbErr::Exec(RuntimeErr::SqlxError(pg_failure("23502")));
        let check = DbErr::Query(RuntimeErr::SqlxError(pg_failure("23514")));

        assert!(matches!(
            map_db_err(not_null),
            DomainError::ConstraintViolation(_)
        ));
        assert!(matches!(map_db_err(check), DomainError::ConstraintViolation(_)));
    }

    #[test]
    fn test_sea_orm_pool_timeout_is_connection_error() {
        let err = DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::PoolTimedOut));
        assert!(map_db_err(err).is_connection());
    }

    #[test]
    fn test_pool_failures_are_connection_errors() {
        assert!(map_sqlx_error(sqlx::Error::PoolTimedOut).is_connection());
        assert!(map_sqlx_error(sqlx::Error::PoolClosed).is_connection());
    }

    #[test]
    fn test_other_sqlx_failures_are_query_errors() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            DomainError::Query(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::ColumnNotFound("tonnage".into())),
            DomainError::Query(_)
        ));
    }

    #[test]
    fn test_sea_orm_connection_errors() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        assert!(map_db_err(err).is_connection());
    }

    #[test]
    fn test_sea_orm_other_errors_are_query_errors() {
        let err = DbErr::Custom("boom".into());
        assert!(matches!(map_db_err(err), DomainError::Query(msg) if msg.contains("boom")));
    }
}
