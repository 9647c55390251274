use crate::DomainError;

/// Encoded photo ready to be stored as proof of delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Turns an arbitrary upload into the bounded format the ledger stores.
///
/// Normalization is CPU bound and synchronous; async callers should move it
/// off the runtime threads.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait ImageNormalizer: Send + Sync {
    fn normalize(&self, raw: &[u8]) -> Result<NormalizedImage, DomainError>;
}
