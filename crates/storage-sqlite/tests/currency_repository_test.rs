//! Integration tests for the SQLite currency repository.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use shopadmin_core::currencies::{
    CurrencyRepositoryTrait, CurrencyUpdate, NewCurrency, ValidatedCurrency,
};
use shopadmin_core::errors::{DatabaseError, Error};
use shopadmin_storage_sqlite::currencies::CurrencyRepository;
use shopadmin_storage_sqlite::{create_pool, init, run_migrations, DbPool};

fn setup() -> (TempDir, Arc<DbPool>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    (dir, pool)
}

fn validated(iso_code: &str, numeric_iso_code: u16, shop_ids: Vec<i32>) -> ValidatedCurrency {
    let mut names = HashMap::new();
    names.insert("en".to_string(), format!("{} name", iso_code));

    ValidatedCurrency {
        new_currency: NewCurrency {
            iso_code: iso_code.to_string(),
            numeric_iso_code: Some(numeric_iso_code),
            unofficial: false,
            exchange_rate: dec!(1.25),
            enabled: true,
            names,
            symbols: HashMap::new(),
            shop_ids,
        },
        numeric_iso_code,
        decimal_digits: 2,
    }
}

#[tokio::test]
async fn create_and_lookup_roundtrip() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    let created = repository
        .create(validated("USD", 840, vec![2, 1, 1]))
        .await
        .unwrap();

    assert_eq!(created.iso_code, "USD");
    assert_eq!(created.numeric_iso_code, Some(840));
    assert_eq!(created.decimal_digits, 2);
    // Duplicated shop ids collapse into one association row each.
    assert_eq!(created.shop_ids, vec![1, 2]);

    assert!(repository.exists_by_iso_code("USD").unwrap());
    assert!(!repository.exists_by_iso_code("EUR").unwrap());

    let found = repository.find_by_numeric_code(840).unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.exchange_rate, dec!(1.25));
    assert_eq!(found.names.get("en").unwrap(), "USD name");
    assert_eq!(found.shop_ids, vec![1, 2]);

    assert!(repository.find_by_numeric_code(978).unwrap().is_none());
    assert_eq!(repository.list_numeric_codes().unwrap(), vec![840]);

    let by_iso = repository.get_by_iso_code("USD").unwrap().unwrap();
    assert_eq!(by_iso.id, created.id);
}

#[tokio::test]
async fn duplicate_iso_code_maps_to_unique_violation() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    repository
        .create(validated("USD", 840, vec![1]))
        .await
        .unwrap();
    let result = repository.create(validated("USD", 841, vec![1])).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[tokio::test]
async fn duplicate_numeric_code_maps_to_unique_violation() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    repository
        .create(validated("USD", 840, vec![1]))
        .await
        .unwrap();
    let result = repository.create(validated("EUR", 840, vec![1])).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[tokio::test]
async fn update_replaces_fields_and_shop_associations() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    let created = repository
        .create(validated("USD", 840, vec![1, 2]))
        .await
        .unwrap();

    let mut names = HashMap::new();
    names.insert("en".to_string(), "Renamed".to_string());

    let updated = repository
        .update(CurrencyUpdate {
            id: Some(created.id.clone()),
            exchange_rate: dec!(2.5),
            enabled: false,
            names,
            symbols: HashMap::new(),
            shop_ids: vec![3],
        })
        .await
        .unwrap();

    assert_eq!(updated.exchange_rate, dec!(2.5));
    assert!(!updated.enabled);
    assert_eq!(updated.shop_ids, vec![3]);

    let reloaded = repository.get_by_id(&created.id).unwrap();
    assert_eq!(reloaded.names.get("en").unwrap(), "Renamed");
    assert_eq!(reloaded.shop_ids, vec![3]);
    // Identity fields are untouched by updates.
    assert_eq!(reloaded.iso_code, "USD");
    assert_eq!(reloaded.numeric_iso_code, Some(840));
}

#[tokio::test]
async fn update_of_a_missing_currency_is_not_found() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    let result = repository
        .update(CurrencyUpdate {
            id: Some("missing".to_string()),
            exchange_rate: dec!(1),
            enabled: true,
            names: HashMap::new(),
            symbols: HashMap::new(),
            shop_ids: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn delete_frees_both_unique_codes() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    let created = repository
        .create(validated("USD", 840, vec![1, 2]))
        .await
        .unwrap();

    let deleted = repository.delete(&created.id).await.unwrap();
    assert_eq!(deleted, 1);

    assert!(matches!(
        repository.get_by_id(&created.id),
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));

    // The iso and numeric codes are reusable once the row (and its cascade-deleted
    // shop associations) are gone.
    let recreated = repository
        .create(validated("USD", 840, vec![3]))
        .await
        .unwrap();
    assert_eq!(recreated.shop_ids, vec![3]);
}

#[tokio::test]
async fn list_filters_by_enabled_status() {
    let (_dir, pool) = setup();
    let repository = CurrencyRepository::new(pool);

    let usd = repository
        .create(validated("USD", 840, vec![1]))
        .await
        .unwrap();
    repository
        .create(validated("EUR", 978, vec![1]))
        .await
        .unwrap();

    repository
        .update(CurrencyUpdate {
            id: Some(usd.id.clone()),
            exchange_rate: usd.exchange_rate,
            enabled: false,
            names: usd.names.clone(),
            symbols: usd.symbols.clone(),
            shop_ids: usd.shop_ids.clone(),
        })
        .await
        .unwrap();

    let all = repository.list(None).unwrap();
    assert_eq!(all.len(), 2);

    let enabled = repository.list(Some(true)).unwrap();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].iso_code, "EUR");
}
