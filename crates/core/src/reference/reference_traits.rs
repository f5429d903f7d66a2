//! Reference catalog trait.

use super::reference_model::ReferenceCurrency;
use crate::errors::Result;

/// Trait defining the contract for reference currency catalog lookups.
///
/// The catalog is finite and read-only; it is queried per validation call
/// and implementations are free to cache or not.
pub trait ReferenceCatalogTrait: Send + Sync {
    /// Returns every reference currency known for the given locale.
    fn currencies(&self, locale: &str) -> Result<Vec<ReferenceCurrency>>;
}
