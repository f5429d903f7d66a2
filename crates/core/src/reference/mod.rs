//! Reference catalog module - CLDR-derived currency metadata.

mod cldr_catalog;
mod reference_model;
mod reference_traits;

// Re-export the public interface
pub use cldr_catalog::CldrCatalog;
pub use reference_model::ReferenceCurrency;
pub use reference_traits::ReferenceCatalogTrait;
