//! Repository for managing currency data in the database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;

use shopadmin_core::currencies::{
    Currency, CurrencyRepositoryTrait, CurrencyUpdate, ValidatedCurrency,
};
use shopadmin_core::errors::{Error, Result, ValidationError};

use super::model::{CurrencyDB, CurrencyShopDB};
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{currencies, currency_shops};

/// Repository for managing currency data in the database.
pub struct CurrencyRepository {
    pool: Arc<DbPool>,
}

impl CurrencyRepository {
    /// Creates a new CurrencyRepository instance.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn load_shop_ids(conn: &mut SqliteConnection, currency_id: &str) -> Result<Vec<i32>> {
        currency_shops::table
            .filter(currency_shops::currency_id.eq(currency_id))
            .select(currency_shops::shop_id)
            .order(currency_shops::shop_id.asc())
            .load::<i32>(conn)
            .into_core()
    }

    fn insert_shop_rows(
        conn: &mut SqliteConnection,
        currency_id: &str,
        shop_ids: &[i32],
    ) -> std::result::Result<Vec<i32>, diesel::result::Error> {
        let mut shop_ids = shop_ids.to_vec();
        shop_ids.sort_unstable();
        shop_ids.dedup();

        let rows: Vec<CurrencyShopDB> = shop_ids
            .iter()
            .map(|shop_id| CurrencyShopDB {
                currency_id: currency_id.to_string(),
                shop_id: *shop_id,
            })
            .collect();

        if !rows.is_empty() {
            diesel::insert_into(currency_shops::table)
                .values(&rows)
                .execute(conn)?;
        }

        Ok(shop_ids)
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    /// Returns true when a currency with this ISO code is already persisted.
    fn exists_by_iso_code(&self, iso_code: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;

        let count: i64 = currencies::table
            .filter(currencies::iso_code.eq(iso_code))
            .count()
            .get_result(&mut conn)
            .into_core()?;

        Ok(count > 0)
    }

    /// Retrieves the currency holding the given numeric ISO code, if any.
    fn find_by_numeric_code(&self, numeric_iso_code: u16) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let row = currencies::table
            .filter(currencies::numeric_iso_code.eq(i32::from(numeric_iso_code)))
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .into_core()?;

        match row {
            Some(currency_db) => {
                let shop_ids = Self::load_shop_ids(&mut conn, &currency_db.id)?;
                Ok(Some(currency_db.into_domain(shop_ids)))
            }
            None => Ok(None),
        }
    }

    /// Lists every numeric ISO code currently persisted.
    fn list_numeric_codes(&self) -> Result<Vec<u16>> {
        let mut conn = get_connection(&self.pool)?;

        let codes: Vec<Option<i32>> = currencies::table
            .select(currencies::numeric_iso_code)
            .load(&mut conn)
            .into_core()?;

        Ok(codes
            .into_iter()
            .flatten()
            .filter_map(|code| u16::try_from(code).ok())
            .collect())
    }

    /// Creates a currency and its shop associations within one transaction.
    async fn create(&self, validated: ValidatedCurrency) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;

        let (currency_db, shop_ids) = conn
            .transaction::<(CurrencyDB, Vec<i32>), StorageError, _>(|tx_conn| {
                let mut currency_db = CurrencyDB::from(&validated);
                currency_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(currencies::table)
                    .values(&currency_db)
                    .execute(tx_conn)?;

                let shop_ids = Self::insert_shop_rows(
                    tx_conn,
                    &currency_db.id,
                    &validated.new_currency.shop_ids,
                )?;

                Ok((currency_db, shop_ids))
            })
            .map_err(Error::from)?;

        debug!(
            "Created currency {} ({})",
            currency_db.iso_code, currency_db.id
        );
        Ok(currency_db.into_domain(shop_ids))
    }

    /// Updates a currency's mutable fields and replaces its shop associations.
    async fn update(&self, update: CurrencyUpdate) -> Result<Currency> {
        update.validate()?;
        let currency_id = update
            .id
            .clone()
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("id".to_string())))?;

        let mut conn = get_connection(&self.pool)?;

        let (currency_db, shop_ids) = conn
            .transaction::<(CurrencyDB, Vec<i32>), StorageError, _>(|tx_conn| {
                let mut currency_db = currencies::table
                    .select(CurrencyDB::as_select())
                    .find(&currency_id)
                    .first::<CurrencyDB>(tx_conn)?;

                currency_db.apply_update(&update);

                diesel::update(currencies::table.find(&currency_id))
                    .set(&currency_db)
                    .execute(tx_conn)?;

                diesel::delete(
                    currency_shops::table.filter(currency_shops::currency_id.eq(&currency_id)),
                )
                .execute(tx_conn)?;
                let shop_ids = Self::insert_shop_rows(tx_conn, &currency_id, &update.shop_ids)?;

                Ok((currency_db, shop_ids))
            })
            .map_err(Error::from)?;

        Ok(currency_db.into_domain(shop_ids))
    }

    /// Deletes a currency; shop associations go with it via ON DELETE CASCADE.
    async fn delete(&self, currency_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        diesel::delete(currencies::table.find(currency_id))
            .execute(&mut conn)
            .into_core()
    }

    /// Retrieves a currency by its ID.
    fn get_by_id(&self, currency_id: &str) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;

        let currency_db = currencies::table
            .select(CurrencyDB::as_select())
            .find(currency_id)
            .first::<CurrencyDB>(&mut conn)
            .into_core()?;

        let shop_ids = Self::load_shop_ids(&mut conn, &currency_db.id)?;
        Ok(currency_db.into_domain(shop_ids))
    }

    /// Retrieves a currency by its alphabetic ISO code.
    fn get_by_iso_code(&self, iso_code: &str) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let row = currencies::table
            .filter(currencies::iso_code.eq(iso_code))
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .into_core()?;

        match row {
            Some(currency_db) => {
                let shop_ids = Self::load_shop_ids(&mut conn, &currency_db.id)?;
                Ok(Some(currency_db.into_domain(shop_ids)))
            }
            None => Ok(None),
        }
    }

    /// Lists currencies, optionally filtering by enabled status.
    fn list(&self, enabled_filter: Option<bool>) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = currencies::table.into_boxed();
        if let Some(enabled) = enabled_filter {
            query = query.filter(currencies::enabled.eq(enabled));
        }

        let rows = query
            .select(CurrencyDB::as_select())
            .order(currencies::iso_code.asc())
            .load::<CurrencyDB>(&mut conn)
            .into_core()?;

        let shop_rows: Vec<CurrencyShopDB> = currency_shops::table
            .select(CurrencyShopDB::as_select())
            .load(&mut conn)
            .into_core()?;

        let mut shops_by_currency: HashMap<String, Vec<i32>> = HashMap::new();
        for row in shop_rows {
            shops_by_currency
                .entry(row.currency_id)
                .or_default()
                .push(row.shop_id);
        }

        Ok(rows
            .into_iter()
            .map(|currency_db| {
                let mut shop_ids = shops_by_currency
                    .remove(&currency_db.id)
                    .unwrap_or_default();
                shop_ids.sort_unstable();
                currency_db.into_domain(shop_ids)
            })
            .collect())
    }
}
