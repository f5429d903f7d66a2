//! Reference catalog domain models.

use serde::{Deserialize, Serialize};

/// One reference currency as published for a given locale.
///
/// Read-only view over the CLDR-derived dataset; the validator treats it as
/// ground truth for official currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCurrency {
    pub iso_code: String,
    pub numeric_iso_code: Option<u16>,
    pub decimal_digits: u8,
    /// Display name localized for the queried locale.
    pub display_name: String,
    pub symbol: String,
}
