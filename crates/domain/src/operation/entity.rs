use crate::error::{DomainError, Result};
use crate::vehicle::Plate;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Surrogate key of a ledger row, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(i32);

impl OperationId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded cargo movement as read back from the ledger.
///
/// Listing never loads the proof image itself; `has_proof_image` tells the
/// caller whether fetching it is worthwhile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub recorded_at: Option<NaiveDateTime>,
    pub operation_date: NaiveDate,
    /// Plate as written at recording time; the vehicle may no longer exist
    pub plate: String,
    /// Driver snapshot at recording time
    pub driver: Option<String>,
    pub description: Option<String>,
    pub sack_count: Option<i32>,
    pub tonnage: Option<f32>,
    pub proof_filename: Option<String>,
    pub has_proof_image: bool,
}

/// A ledger row about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewOperation {
    pub operation_date: NaiveDate,
    pub plate: Plate,
    pub driver: Option<String>,
    pub description: Option<String>,
    pub sack_count: i32,
    pub tonnage: f32,
    pub proof_image: Option<Vec<u8>>,
    pub proof_filename: Option<String>,
}

impl NewOperation {
    pub fn new(operation_date: NaiveDate, plate: Plate, sack_count: i32, tonnage: f32) -> Self {
        Self {
            operation_date,
            plate,
            driver: None,
            description: None,
            sack_count,
            tonnage,
            proof_image: None,
            proof_filename: None,
        }
    }

    pub fn with_driver(mut self, driver: Option<String>) -> Self {
        self.driver = non_blank(driver);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description);
        self
    }

    pub fn with_proof(mut self, image: Vec<u8>, filename: Option<String>) -> Self {
        self.proof_image = Some(image);
        self.proof_filename = non_blank(filename);
        self
    }

    /// Acceptance rules applied before a movement is persisted.
    ///
    /// The store itself only enforces column types and NOT NULL.
    pub fn validate(&self) -> Result<()> {
        if self.sack_count <= 0 {
            return Err(DomainError::Validation(format!(
                "sack count must be greater than zero (got {})",
                self.sack_count
            )));
        }

        if !self.tonnage.is_finite() || self.tonnage <= 0.0 {
            return Err(DomainError::Validation(format!(
                "tonnage must be greater than zero (got {})",
                self.tonnage
            )));
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
