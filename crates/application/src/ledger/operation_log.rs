use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use domain::operation::{
    NewOperation, Operation, OperationFilter, OperationId, OperationRepository, OperationSummary,
};
use domain::proof::{ImageNormalizer, NormalizedImage};
use domain::vehicle::Plate;
use domain::DomainError;

/// Raw upload attached to a movement
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub bytes: Vec<u8>,
    /// Name of the file as uploaded, kept for display
    pub filename: Option<String>,
}

/// Form input for one cargo movement
#[derive(Debug, Clone)]
pub struct RecordOperation {
    pub operation_date: NaiveDate,
    pub plate: String,
    pub driver: Option<String>,
    pub description: Option<String>,
    pub sack_count: i32,
    pub tonnage: f32,
    pub photo: Option<UploadedPhoto>,
}

/// Filtered ledger rows and their totals
#[derive(Debug, Clone, Serialize)]
pub struct History {
    pub operations: Vec<Operation>,
    pub summary: OperationSummary,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Recording and retrieval of cargo movements
pub struct OperationLog {
    operations: Arc<dyn OperationRepository>,
    normalizer: Arc<dyn ImageNormalizer>,
}

impl OperationLog {
    pub fn new(
        operations: Arc<dyn OperationRepository>,
        normalizer: Arc<dyn ImageNormalizer>,
    ) -> Self {
        Self {
            operations,
            normalizer,
        }
    }

    /// Validate, normalize the photo if any, and append to the ledger.
    ///
    /// Nothing is persisted when validation or image normalization fails.
    pub async fn record(&self, request: RecordOperation) -> Result<OperationId, DomainError> {
        let plate = Plate::new(&request.plate)?;

        let mut operation = NewOperation::new(
            request.operation_date,
            plate,
            request.sack_count,
            request.tonnage,
        )
        .with_driver(request.driver)
        .with_description(request.description);

        if let Err(e) = operation.validate() {
            warn!(plate = %operation.plate, "Rejected operation: {}", e);
            return Err(e);
        }

        if let Some(photo) = request.photo {
            let normalized = self.normalize(photo.bytes).await?;
            operation = operation.with_proof(normalized.bytes, photo.filename);
        }

        let id = self.operations.insert(&operation).await?;
        info!(
            id = %id,
            plate = %operation.plate,
            driver = operation.driver.as_deref().unwrap_or("-"),
            "✅ Operation saved"
        );
        Ok(id)
    }

    async fn normalize(&self, raw: Vec<u8>) -> Result<NormalizedImage, DomainError> {
        let normalizer = Arc::clone(&self.normalizer);
        tokio::task::spawn_blocking(move || normalizer.normalize(&raw))
            .await
            .map_err(|e| DomainError::ImageEncode(format!("Normalizer task failed: {}", e)))?
    }

    pub async fn history(&self, filter: &OperationFilter) -> Result<History, DomainError> {
        let operations = self.operations.query(filter).await?;
        let summary = OperationSummary::from_operations(&operations);
        Ok(History {
            operations,
            summary,
        })
    }

    pub async fn proof_image(&self, id: OperationId) -> Result<Option<Vec<u8>>, DomainError> {
        self.operations.fetch_image(id).await
    }

    pub async fn remove(&self, id: OperationId) -> Result<(), DomainError> {
        self.operations.delete(id).await?;
        info!(id = %id, "🗑️ Operation removed");
        Ok(())
    }
}
