//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic construction-time validation failure.
/// The daily update itself is total: all arithmetic is clamped, so advancing
/// an inventory never raises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A non-legendary item's starting quality is outside the 0..=50 band.
    #[error("quality out of range for {name:?}: {quality} (allowed 0..=50)")]
    QualityOutOfRange { name: String, quality: i32 },

    /// An item's starting sell-in is negative (checked for every category).
    #[error("negative sell-in for {name:?}: {sell_in}")]
    NegativeSellIn { name: String, sell_in: i32 },
}

impl DomainError {
    pub fn quality_out_of_range(name: impl Into<String>, quality: i32) -> Self {
        Self::QualityOutOfRange {
            name: name.into(),
            quality,
        }
    }

    pub fn negative_sell_in(name: impl Into<String>, sell_in: i32) -> Self {
        Self::NegativeSellIn {
            name: name.into(),
            sell_in,
        }
    }
}
