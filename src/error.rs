//! Error types for item validation.
//!
//! The nightly update itself recognizes no error conditions; these errors
//! are produced only by the opt-in [`Item::validated`](crate::Item::validated)
//! constructor.

use crate::rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use thiserror::Error;

/// Errors that the validating constructor can report.
///
/// # Examples
///
/// ```rust
/// use stockrot::ItemError;
///
/// let err = ItemError::QualityOutOfRange { quality: 51 };
/// println!("{}", err); // "quality 51 is outside the allowed range [0, 50]"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Quality outside the nominal `[0, 50]` range for a non-legendary item.
    #[error(
        "quality {quality} is outside the allowed range [{}, {}]",
        MIN_QUALITY,
        MAX_QUALITY
    )]
    QualityOutOfRange { quality: i32 },

    /// A legendary item constructed with anything but its fixed quality.
    #[error(
        "legendary items hold a fixed quality of {} (got {quality})",
        LEGENDARY_QUALITY
    )]
    LegendaryQualityMismatch { quality: i32 },
}
