use crate::vehicle::Plate;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Plate predicate of a history query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateFilter {
    /// No plate restriction
    #[default]
    Any,
    Exact(Plate),
}

impl PlateFilter {
    /// Words a user may type to ask for every plate
    const ANY_KEYWORDS: [&'static str; 2] = ["ALL", "TODAS"];

    /// Parse user input; blank input and the "all" keywords mean no filter.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty()
            || Self::ANY_KEYWORDS
                .iter()
                .any(|k| k.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Any);
        }
        Ok(Self::Exact(Plate::new(trimmed)?))
    }

    pub fn plate(&self) -> Option<&Plate> {
        match self {
            Self::Any => None,
            Self::Exact(plate) => Some(plate),
        }
    }
}

/// Conjunction of independently optional predicates over the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationFilter {
    /// Inclusive lower bound on the operation date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the operation date
    pub to: Option<NaiveDate>,
    pub plate: PlateFilter,
    /// Case-insensitive substring of the driver name
    pub driver_contains: Option<String>,
}

impl OperationFilter {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    pub fn with_plate(mut self, plate: PlateFilter) -> Self {
        self.plate = plate;
        self
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver_contains = Some(driver.into());
        self
    }

    /// Driver needle to match, if any. Blank input means no driver filter.
    pub fn driver_needle(&self) -> Option<&str> {
        self.driver_contains
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
