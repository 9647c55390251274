use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Vehicle category
///
/// Storage keeps the category as free text; the known variants are the ones
/// offered when registering a unit. Anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleKind {
    Tractomula,
    Dobletroque,
    Sencillo,
    Turbo,
    Other(String),
}

impl VehicleKind {
    pub const KNOWN: [VehicleKind; 4] = [
        Self::Tractomula,
        Self::Dobletroque,
        Self::Sencillo,
        Self::Turbo,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Tractomula => "Tractomula",
            Self::Dobletroque => "Dobletroque",
            Self::Sencillo => "Sencillo",
            Self::Turbo => "Turbo",
            Self::Other(s) => s,
        }
    }
}

impl Default for VehicleKind {
    fn default() -> Self {
        Self::Tractomula
    }
}

impl FromStr for VehicleKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kind = Self::KNOWN
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Other(trimmed.to_string()));
        Ok(kind)
    }
}

impl From<String> for VehicleKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<VehicleKind> for String {
    fn from(kind: VehicleKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_parse_case_insensitively() {
        assert_eq!("tractomula".parse::<VehicleKind>().unwrap(), VehicleKind::Tractomula);
        assert_eq!("TURBO".parse::<VehicleKind>().unwrap(), VehicleKind::Turbo);
        assert_eq!(" Sencillo ".parse::<VehicleKind>().unwrap(), VehicleKind::Sencillo);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let kind: VehicleKind = "Volqueta".parse().unwrap();
        assert_eq!(kind, VehicleKind::Other("Volqueta".to_string()));
        assert_eq!(kind.as_str(), "Volqueta");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(VehicleKind::Dobletroque.as_str(), "Dobletroque");
        assert_eq!(VehicleKind::default().as_str(), "Tractomula");
    }
}
