//! Conflict errors raised while validating a new currency.

use thiserror::Error;

/// Errors produced by currency creation validation.
///
/// All variants are caller-recoverable: the admin surface maps them to
/// form-level feedback rather than aborting.
#[derive(Error, Debug)]
pub enum CurrencyError {
    /// A currency with this alphabetic ISO code is already persisted.
    #[error("A currency with ISO code '{0}' already exists")]
    IsoCodeExists(String),

    /// A currency with this numeric ISO code is already persisted.
    #[error("A currency with numeric ISO code {0} already exists")]
    NumericCodeExists(u16),

    /// The supplied ISO code / numeric code pair matches no reference entry.
    #[error("ISO code '{iso_code}' and numeric ISO code {numeric_iso_code} do not match any reference currency")]
    MismatchingIsoCodes {
        iso_code: String,
        numeric_iso_code: u16,
    },

    /// The ISO code of an official currency is unknown to the reference catalog.
    #[error("ISO code '{0}' was not found in the reference catalog")]
    InvalidIsoCode(String),

    /// Every numeric code in the assignable range is taken.
    #[error("No unused numeric ISO code remains in the assignable range")]
    NoCandidateNumericCode,
}
