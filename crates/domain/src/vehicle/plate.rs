use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

const MAX_PLATE_LEN: usize = 32;

/// Value object identifying a vehicle in the registry
///
/// Rules:
/// - Surrounding whitespace is trimmed
/// - Stored uppercase
/// - Must be non-empty
/// - Max length 32 characters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Create a new Plate, normalizing case and whitespace
    pub fn new(plate: impl AsRef<str>) -> Result<Self> {
        let plate = plate.as_ref().trim().to_uppercase();

        if plate.is_empty() {
            return Err(DomainError::InvalidPlate(
                "Plate cannot be empty".to_string(),
            ));
        }

        if plate.chars().count() > MAX_PLATE_LEN {
            return Err(DomainError::InvalidPlate(format!(
                "Plate too long: {} chars (max {MAX_PLATE_LEN})",
                plate.chars().count()
            )));
        }

        if plate.chars().any(char::is_control) {
            return Err(DomainError::InvalidPlate(format!(
                "Plate {plate:?} contains control characters"
            )));
        }

        Ok(Self(plate))
    }

    /// Wrap a plate read back from storage exactly as it was written.
    ///
    /// Rows written by other tools may not be normalized; keeping them verbatim
    /// lets exact-match deletes find them again.
    pub fn from_stored(plate: String) -> Self {
        Self(plate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Plate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_is_uppercased_and_trimmed() {
        let plate = Plate::new("  abc-123 ").unwrap();
        assert_eq!(plate.as_str(), "ABC-123");
    }

    #[test]
    fn test_empty_plate() {
        let result = Plate::new("   ");
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidPlate("Plate cannot be empty".to_string())
        );
    }

    #[test]
    fn test_plate_too_long() {
        assert!(Plate::new("X".repeat(33)).is_err());
        assert!(Plate::new("X".repeat(32)).is_ok());
    }

    #[test]
    fn test_plate_with_control_characters() {
        assert!(Plate::new("ABC\n123").is_err());
    }

    #[test]
    fn test_stored_plate_is_kept_verbatim() {
        assert_eq!(Plate::from_stored("abc-lower".to_string()).as_str(), "abc-lower");
        assert_eq!(Plate::from_stored(String::new()).as_str(), "");
    }

    #[test]
    fn test_plate_serde_validates() {
        let plate: Plate = serde_json::from_str("\"xyz-999\"").unwrap();
        assert_eq!(plate.as_str(), "XYZ-999");
        assert!(serde_json::from_str::<Plate>("\"\"").is_err());
    }
}
