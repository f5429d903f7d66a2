//! SQLite-backed currency storage.

pub mod model;
pub mod repository;

pub use model::{CurrencyDB, CurrencyShopDB};
pub use repository::CurrencyRepository;
