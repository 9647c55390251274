use super::error::map_sqlx_error;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use domain::operation::{NewOperation, Operation, OperationFilter, OperationId, OperationRepository};
use domain::DomainError;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};

/// Listing columns. The image payload is never loaded here, only its presence.
const SELECT_OPERATIONS: &str = r#"
    SELECT id, recorded_at, operation_date, plate, driver, description,
           sack_count, tonnage, proof_filename,
           (proof_image IS NOT NULL AND octet_length(proof_image) > 0) AS has_proof_image
    FROM operations
    WHERE 1=1"#;

#[derive(Debug, sqlx::FromRow)]
struct OperationRow {
    id: i32,
    recorded_at: Option<NaiveDateTime>,
    operation_date: NaiveDate,
    plate: String,
    driver: Option<String>,
    description: Option<String>,
    sack_count: Option<i32>,
    tonnage: Option<f32>,
    proof_filename: Option<String>,
    has_proof_image: bool,
}

impl From<OperationRow> for Operation {
    fn from(row: OperationRow) -> Self {
        Operation {
            id: OperationId::new(row.id),
            recorded_at: row.recorded_at,
            operation_date: row.operation_date,
            plate: row.plate,
            driver: row.driver,
            description: row.description,
            sack_count: row.sack_count,
            tonnage: row.tonnage,
            proof_filename: row.proof_filename,
            has_proof_image: row.has_proof_image,
        }
    }
}

/// PostgreSQL implementation of OperationRepository
#[derive(Clone)]
pub struct PostgresOperationRepository {
    pool: PgPool,
}

impl PostgresOperationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Appends one predicate per supplied filter field. Every caller value goes
/// through `push_bind`, never into the SQL text.
pub(crate) fn build_history_query(filter: &OperationFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_OPERATIONS);

    if let Some(from) = filter.from {
        query.push(" AND operation_date >= ").push_bind(from);
    }
    if let Some(to) = filter.to {
        query.push(" AND operation_date <= ").push_bind(to);
    }
    if let Some(plate) = filter.plate.plate() {
        query.push(" AND plate = ").push_bind(plate.as_str().to_string());
    }
    if let Some(needle) = filter.driver_needle() {
        query
            .push(" AND driver ILIKE ")
            .push_bind(format!("%{}%", escape_like(needle)));
    }

    query.push(" ORDER BY operation_date DESC, id DESC");
    query
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl OperationRepository for PostgresOperationRepository {
    async fn insert(&self, operation: &NewOperation) -> Result<OperationId, DomainError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO operations (
                operation_date, plate, driver, description,
                sack_count, tonnage, proof_image, proof_filename
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(operation.operation_date)
        .bind(operation.plate.as_str())
        .bind(operation.driver.as_deref())
        .bind(operation.description.as_deref())
        .bind(operation.sack_count)
        .bind(operation.tonnage)
        .bind(operation.proof_image.as_deref())
        .bind(operation.proof_filename.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        info!(
            id,
            plate = %operation.plate,
            date = %operation.operation_date,
            sacks = operation.sack_count,
            tons = operation.tonnage,
            image_bytes = operation.proof_image.as_ref().map_or(0, Vec::len),
            "Operation recorded"
        );
        Ok(OperationId::new(id))
    }

    async fn query(&self, filter: &OperationFilter) -> Result<Vec<Operation>, DomainError> {
        let mut query = build_history_query(filter);
        debug!(sql = %query.sql(), "Querying operations");

        let rows = query
            .build_query_as::<OperationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Operations loaded");
        Ok(rows.into_iter().map(Operation::from).collect())
    }

    async fn fetch_image(&self, id: OperationId) -> Result<Option<Vec<u8>>, DomainError> {
        // Vec<u8> decodes into a freshly allocated buffer, detached from the row
        let payload = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT proof_image FROM operations WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(payload.flatten().filter(|bytes| !bytes.is_empty()))
    }

    async fn delete(&self, id: OperationId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM operations WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        info!(id = %id, rows = result.rows_affected(), "Operation deleted");
        Ok(())
    }
}
