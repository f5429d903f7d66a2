//! Currency domain models.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies_constants::{ISO_CODE_LENGTH, NUMERIC_ISO_CODE_MAX, NUMERIC_ISO_CODE_MIN};
use crate::errors::ValidationError;
use crate::{Error, Result};

/// Domain model representing a persisted currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub iso_code: String,
    pub numeric_iso_code: Option<u16>,
    pub decimal_digits: u8,
    pub exchange_rate: Decimal,
    /// True for currencies absent from the reference catalog.
    pub unofficial: bool,
    pub enabled: bool,
    /// Display names keyed by locale.
    #[serde(default)]
    pub names: HashMap<String, String>,
    /// Symbols keyed by locale.
    #[serde(default)]
    pub symbols: HashMap<String, String>,
    /// Shops this currency is available in.
    #[serde(default)]
    pub shop_ids: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Currency {
    /// Returns the display name for the given locale, falling back to the ISO code.
    pub fn display_name(&self, locale: &str) -> &str {
        self.names
            .get(locale)
            .map(String::as_str)
            .unwrap_or(&self.iso_code)
    }

    /// Returns the symbol for the given locale, falling back to the ISO code.
    pub fn symbol(&self, locale: &str) -> &str {
        self.symbols
            .get(locale)
            .map(String::as_str)
            .unwrap_or(&self.iso_code)
    }
}

/// Input model for creating a new currency.
///
/// Consumed once by the creation pipeline; the resolved numeric code lives on
/// [`super::ValidatedCurrency`], never written back into the draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub iso_code: String,
    pub numeric_iso_code: Option<u16>,
    /// True when the currency is not expected in the reference catalog.
    #[serde(default)]
    pub unofficial: bool,
    pub exchange_rate: Decimal,
    pub enabled: bool,
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    pub symbols: HashMap<String, String>,
    #[serde(default)]
    pub shop_ids: Vec<i32>,
}

impl NewCurrency {
    /// Validates the new currency data.
    pub fn validate(&self) -> Result<()> {
        let code = self.iso_code.trim();
        if code.len() != ISO_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "ISO code '{}' must be exactly {} alphabetic characters",
                self.iso_code, ISO_CODE_LENGTH
            ))));
        }
        if self.exchange_rate <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Exchange rate must be positive".to_string(),
            )));
        }
        if let Some(numeric) = self.numeric_iso_code {
            if !(NUMERIC_ISO_CODE_MIN..=NUMERIC_ISO_CODE_MAX).contains(&numeric) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Numeric ISO code {} must lie in {}..={}",
                    numeric, NUMERIC_ISO_CODE_MIN, NUMERIC_ISO_CODE_MAX
                ))));
            }
        }
        Ok(())
    }

    /// Uppercased ISO code used for lookups and persistence.
    pub fn normalized_iso_code(&self) -> String {
        self.iso_code.trim().to_ascii_uppercase()
    }
}

/// Input model for updating an existing currency.
///
/// The ISO code, numeric code, and unofficial flag are fixed at creation;
/// changing them would bypass creation-time validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUpdate {
    pub id: Option<String>,
    pub exchange_rate: Decimal,
    pub enabled: bool,
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    pub symbols: HashMap<String, String>,
    #[serde(default)]
    pub shop_ids: Vec<i32>,
}

impl CurrencyUpdate {
    /// Validates the currency update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.exchange_rate <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Exchange rate must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

impl From<Currency> for CurrencyUpdate {
    fn from(currency: Currency) -> Self {
        Self {
            id: Some(currency.id),
            exchange_rate: currency.exchange_rate,
            enabled: currency.enabled,
            names: currency.names,
            symbols: currency.symbols,
            shop_ids: currency.shop_ids,
        }
    }
}
