//! Creation-time validation and numeric ISO code resolution.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;

use super::currencies_constants::{
    DEFAULT_DECIMAL_DIGITS, NUMERIC_ISO_CODE_MAX, NUMERIC_ISO_CODE_MIN,
};
use super::currencies_model::NewCurrency;
use super::currencies_traits::CurrencyRepositoryTrait;
use super::CurrencyError;
use crate::errors::Result;
use crate::reference::{ReferenceCatalogTrait, ReferenceCurrency};
use crate::Error;

/// Source of numeric ISO codes for synthesized assignments.
///
/// The production implementation picks uniformly at random among the unused
/// codes, spreading assignments across the range instead of always handing
/// out the lowest free code. Repeated calls over identical inputs may
/// therefore return different codes; callers that need a stable pick must
/// supply their own implementation.
pub trait NumericCodeSource: Send + Sync {
    /// Picks one of the candidate codes, or `None` when the slice is empty.
    fn choose(&self, candidates: &[u16]) -> Option<u16>;
}

/// Uniform random pick backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNumericCodeSource;

impl NumericCodeSource for RandomNumericCodeSource {
    fn choose(&self, candidates: &[u16]) -> Option<u16> {
        candidates.choose(&mut rand::thread_rng()).copied()
    }
}

/// Outcome of a successful validation run: the draft plus its resolved
/// numeric ISO code and decimal precision.
#[derive(Debug, Clone)]
pub struct ValidatedCurrency {
    pub new_currency: NewCurrency,
    pub numeric_iso_code: u16,
    pub decimal_digits: u8,
}

/// Stateless validation pipeline for new currencies.
///
/// Checks a draft against the persisted store and the reference catalog,
/// then resolves the numeric ISO code. Reads only; persistence stays with
/// the repository.
pub struct CurrencyValidator<'a> {
    repository: &'a dyn CurrencyRepositoryTrait,
    catalog: &'a dyn ReferenceCatalogTrait,
    code_source: &'a dyn NumericCodeSource,
    locale: &'a str,
}

impl<'a> CurrencyValidator<'a> {
    pub fn new(
        repository: &'a dyn CurrencyRepositoryTrait,
        catalog: &'a dyn ReferenceCatalogTrait,
        code_source: &'a dyn NumericCodeSource,
        locale: &'a str,
    ) -> Self {
        Self {
            repository,
            catalog,
            code_source,
            locale,
        }
    }

    /// Validates the draft and resolves its numeric ISO code.
    ///
    /// Uniqueness is checked against the store before the catalog is read,
    /// so an ISO conflict never triggers a catalog query.
    pub fn run(&self, new_currency: &NewCurrency) -> Result<ValidatedCurrency> {
        new_currency.validate()?;
        self.validate_iso_uniqueness(new_currency)?;
        self.validate_numeric_uniqueness(new_currency)?;

        let entries = self.catalog.currencies(self.locale)?;
        self.validate_iso_numeric_consistency(new_currency, &entries)?;

        let numeric_iso_code = match new_currency.numeric_iso_code {
            Some(code) => code,
            None => self.deduce_numeric_iso_code(new_currency, &entries)?,
        };

        let iso_code = new_currency.normalized_iso_code();
        let decimal_digits = if new_currency.unofficial {
            DEFAULT_DECIMAL_DIGITS
        } else {
            entries
                .iter()
                .find(|entry| entry.iso_code == iso_code)
                .map(|entry| entry.decimal_digits)
                .unwrap_or(DEFAULT_DECIMAL_DIGITS)
        };

        debug!(
            "Validated currency {}, numeric ISO code {}",
            iso_code, numeric_iso_code
        );

        Ok(ValidatedCurrency {
            new_currency: new_currency.clone(),
            numeric_iso_code,
            decimal_digits,
        })
    }

    /// Rejects drafts whose ISO code is already persisted.
    pub fn validate_iso_uniqueness(&self, new_currency: &NewCurrency) -> Result<()> {
        let iso_code = new_currency.normalized_iso_code();
        if self.repository.exists_by_iso_code(&iso_code)? {
            return Err(Error::Currency(CurrencyError::IsoCodeExists(iso_code)));
        }
        Ok(())
    }

    /// Rejects drafts whose supplied numeric code is already persisted.
    pub fn validate_numeric_uniqueness(&self, new_currency: &NewCurrency) -> Result<()> {
        let Some(numeric_iso_code) = new_currency.numeric_iso_code else {
            return Ok(());
        };
        if self
            .repository
            .find_by_numeric_code(numeric_iso_code)?
            .is_some()
        {
            return Err(Error::Currency(CurrencyError::NumericCodeExists(
                numeric_iso_code,
            )));
        }
        Ok(())
    }

    /// Rejects official drafts whose supplied (iso, numeric) pair matches no
    /// reference entry. First match wins; reference data carries no duplicate
    /// pairs.
    pub fn validate_iso_numeric_consistency(
        &self,
        new_currency: &NewCurrency,
        entries: &[ReferenceCurrency],
    ) -> Result<()> {
        if new_currency.unofficial {
            return Ok(());
        }
        let Some(numeric_iso_code) = new_currency.numeric_iso_code else {
            return Ok(());
        };

        let iso_code = new_currency.normalized_iso_code();
        let matched = entries.iter().any(|entry| {
            entry.iso_code == iso_code && entry.numeric_iso_code == Some(numeric_iso_code)
        });
        if !matched {
            return Err(Error::Currency(CurrencyError::MismatchingIsoCodes {
                iso_code,
                numeric_iso_code,
            }));
        }
        Ok(())
    }

    /// Resolves the numeric ISO code for a draft that supplied none.
    ///
    /// Official currencies take the reference entry's code; unofficial ones
    /// (and official entries the catalog lists without a code) get an unused
    /// code from the assignable range.
    pub fn deduce_numeric_iso_code(
        &self,
        new_currency: &NewCurrency,
        entries: &[ReferenceCurrency],
    ) -> Result<u16> {
        if new_currency.unofficial {
            return self.pick_unused_numeric_code(entries);
        }

        let iso_code = new_currency.normalized_iso_code();
        let entry = entries
            .iter()
            .find(|entry| entry.iso_code == iso_code)
            .ok_or_else(|| Error::Currency(CurrencyError::InvalidIsoCode(iso_code.clone())))?;

        match entry.numeric_iso_code {
            Some(code) => Ok(code),
            None => self.pick_unused_numeric_code(entries),
        }
    }

    fn pick_unused_numeric_code(&self, entries: &[ReferenceCurrency]) -> Result<u16> {
        let mut used: HashSet<u16> = entries
            .iter()
            .filter_map(|entry| entry.numeric_iso_code)
            .filter(|code| *code >= NUMERIC_ISO_CODE_MIN)
            .collect();
        used.extend(self.repository.list_numeric_codes()?);

        let candidates: Vec<u16> = (NUMERIC_ISO_CODE_MIN..=NUMERIC_ISO_CODE_MAX)
            .filter(|code| !used.contains(code))
            .collect();

        debug!("{} unused numeric ISO codes available", candidates.len());

        self.code_source
            .choose(&candidates)
            .ok_or_else(|| Error::Currency(CurrencyError::NoCandidateNumericCode))
    }
}
