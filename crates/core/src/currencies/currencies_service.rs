//! Currency service - orchestrates validation, display defaults, and persistence.

use std::sync::{Arc, RwLock};

use log::debug;

use super::currencies_model::{Currency, CurrencyUpdate, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use super::currency_validator::{
    CurrencyValidator, NumericCodeSource, RandomNumericCodeSource, ValidatedCurrency,
};
use crate::errors::Result;
use crate::reference::ReferenceCatalogTrait;

/// Service for managing currencies.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
    catalog: Arc<dyn ReferenceCatalogTrait>,
    code_source: Arc<dyn NumericCodeSource>,
    locale: Arc<RwLock<String>>,
}

impl CurrencyService {
    /// Creates a new CurrencyService instance.
    pub fn new(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        catalog: Arc<dyn ReferenceCatalogTrait>,
        locale: Arc<RwLock<String>>,
    ) -> Self {
        Self {
            repository,
            catalog,
            code_source: Arc::new(RandomNumericCodeSource),
            locale,
        }
    }

    /// Creates a CurrencyService with a custom numeric code source.
    pub fn with_code_source(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        catalog: Arc<dyn ReferenceCatalogTrait>,
        code_source: Arc<dyn NumericCodeSource>,
        locale: Arc<RwLock<String>>,
    ) -> Self {
        Self {
            repository,
            catalog,
            code_source,
            locale,
        }
    }

    /// Fills missing display name/symbol entries for the active locale.
    ///
    /// Official currencies take the reference entry's localized data;
    /// unofficial ones fall back to the ISO code.
    fn fill_display_defaults(&self, validated: &mut ValidatedCurrency, locale: &str) -> Result<()> {
        let iso_code = validated.new_currency.normalized_iso_code();

        let reference_entry = if validated.new_currency.unofficial {
            None
        } else {
            self.catalog
                .currencies(locale)?
                .into_iter()
                .find(|entry| entry.iso_code == iso_code)
        };

        let new_currency = &mut validated.new_currency;
        if !new_currency.names.contains_key(locale) {
            let name = reference_entry
                .as_ref()
                .map(|entry| entry.display_name.clone())
                .unwrap_or_else(|| iso_code.clone());
            new_currency.names.insert(locale.to_string(), name);
        }
        if !new_currency.symbols.contains_key(locale) {
            let symbol = reference_entry
                .as_ref()
                .map(|entry| entry.symbol.clone())
                .unwrap_or_else(|| iso_code.clone());
            new_currency.symbols.insert(locale.to_string(), symbol);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CurrencyServiceTrait for CurrencyService {
    /// Validates and persists a new currency.
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let locale = self.locale.read().unwrap().clone();
        debug!(
            "Creating currency..., iso_code: {}, locale: {}",
            new_currency.iso_code, locale
        );

        let validator = CurrencyValidator::new(
            self.repository.as_ref(),
            self.catalog.as_ref(),
            self.code_source.as_ref(),
            &locale,
        );
        let mut validated = validator.run(&new_currency)?;

        self.fill_display_defaults(&mut validated, &locale)?;

        self.repository.create(validated).await
    }

    /// Updates an existing currency.
    async fn update_currency(&self, update: CurrencyUpdate) -> Result<Currency> {
        update.validate()?;
        self.repository.update(update).await
    }

    /// Deletes a currency by its ID.
    async fn delete_currency(&self, currency_id: &str) -> Result<()> {
        debug!("Deleting currency {}", currency_id);
        self.repository.delete(currency_id).await?;
        Ok(())
    }

    /// Enables or disables a currency.
    async fn set_currency_enabled(&self, currency_id: &str, enabled: bool) -> Result<Currency> {
        let currency = self.repository.get_by_id(currency_id)?;
        let mut update = CurrencyUpdate::from(currency);
        update.enabled = enabled;
        self.repository.update(update).await
    }

    /// Retrieves a currency by its ID.
    fn get_currency(&self, currency_id: &str) -> Result<Currency> {
        self.repository.get_by_id(currency_id)
    }

    /// Lists currencies, optionally filtering by enabled status.
    fn list_currencies(&self, enabled_filter: Option<bool>) -> Result<Vec<Currency>> {
        self.repository.list(enabled_filter)
    }
}
