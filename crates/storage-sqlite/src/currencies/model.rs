//! Database models for currency storage.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use shopadmin_core::currencies::{
    Currency, CurrencyUpdate, ValidatedCurrency, DEFAULT_DECIMAL_DIGITS,
};

use crate::schema::{currencies, currency_shops};

/// Database model for a currency row.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: String,
    pub iso_code: String,
    pub numeric_iso_code: Option<i32>,
    pub decimal_digits: i32,
    pub exchange_rate: String,
    pub unofficial: bool,
    pub enabled: bool,
    pub names: Option<String>,
    pub symbols: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for a currency/shop association row.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = currency_shops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyShopDB {
    pub currency_id: String,
    pub shop_id: i32,
}

fn parse_locale_map(raw: Option<&str>) -> HashMap<String, String> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

fn to_locale_json(map: &HashMap<String, String>) -> Option<String> {
    if map.is_empty() {
        None
    } else {
        serde_json::to_string(map).ok()
    }
}

impl CurrencyDB {
    /// Builds the domain view from this row and its shop association rows.
    pub fn into_domain(self, shop_ids: Vec<i32>) -> Currency {
        Currency {
            id: self.id,
            iso_code: self.iso_code,
            numeric_iso_code: self
                .numeric_iso_code
                .and_then(|code| u16::try_from(code).ok()),
            decimal_digits: u8::try_from(self.decimal_digits).unwrap_or(DEFAULT_DECIMAL_DIGITS),
            exchange_rate: Decimal::from_str(&self.exchange_rate).unwrap_or_default(),
            unofficial: self.unofficial,
            enabled: self.enabled,
            names: parse_locale_map(self.names.as_deref()),
            symbols: parse_locale_map(self.symbols.as_deref()),
            shop_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies the mutable fields of an update onto this row.
    pub fn apply_update(&mut self, update: &CurrencyUpdate) {
        self.exchange_rate = update.exchange_rate.to_string();
        self.enabled = update.enabled;
        self.names = to_locale_json(&update.names);
        self.symbols = to_locale_json(&update.symbols);
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

impl From<&ValidatedCurrency> for CurrencyDB {
    fn from(validated: &ValidatedCurrency) -> Self {
        let now = chrono::Utc::now().naive_utc();
        let new_currency = &validated.new_currency;
        Self {
            // Assigned by the repository at insert time
            id: String::new(),
            iso_code: new_currency.normalized_iso_code(),
            numeric_iso_code: Some(i32::from(validated.numeric_iso_code)),
            decimal_digits: i32::from(validated.decimal_digits),
            exchange_rate: new_currency.exchange_rate.to_string(),
            unofficial: new_currency.unofficial,
            enabled: new_currency.enabled,
            names: to_locale_json(&new_currency.names),
            symbols: to_locale_json(&new_currency.symbols),
            created_at: now,
            updated_at: now,
        }
    }
}
