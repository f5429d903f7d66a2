//! Tests for currency domain models.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use crate::currencies::{Currency, CurrencyUpdate, NewCurrency};
    use crate::errors::{Error, ValidationError};

    fn valid_draft() -> NewCurrency {
        NewCurrency {
            iso_code: "USD".to_string(),
            numeric_iso_code: Some(840),
            unofficial: false,
            exchange_rate: dec!(1.08),
            enabled: true,
            names: HashMap::new(),
            symbols: HashMap::new(),
            shop_ids: vec![1, 2],
        }
    }

    #[test]
    fn accepts_a_well_formed_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn rejects_iso_codes_of_the_wrong_length() {
        let mut draft = valid_draft();
        draft.iso_code = "US".to_string();
        assert!(matches!(
            draft.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));

        draft.iso_code = "USDT".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn rejects_non_alphabetic_iso_codes() {
        let mut draft = valid_draft();
        draft.iso_code = "U5D".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_exchange_rates() {
        let mut draft = valid_draft();
        draft.exchange_rate = dec!(0);
        assert!(draft.validate().is_err());

        draft.exchange_rate = dec!(-1.5);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn rejects_numeric_codes_outside_the_range() {
        let mut draft = valid_draft();
        draft.numeric_iso_code = Some(0);
        assert!(draft.validate().is_err());

        draft.numeric_iso_code = Some(1000);
        assert!(draft.validate().is_err());

        draft.numeric_iso_code = Some(999);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn normalizes_iso_codes_to_uppercase() {
        let mut draft = valid_draft();
        draft.iso_code = " usd ".to_string();
        assert_eq!(draft.normalized_iso_code(), "USD");
    }

    #[test]
    fn update_requires_an_id() {
        let update = CurrencyUpdate {
            id: None,
            exchange_rate: dec!(1),
            enabled: true,
            names: HashMap::new(),
            symbols: HashMap::new(),
            shop_ids: Vec::new(),
        };
        assert!(matches!(
            update.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn update_rejects_non_positive_exchange_rates() {
        let update = CurrencyUpdate {
            id: Some("cur-1".to_string()),
            exchange_rate: dec!(0),
            enabled: true,
            names: HashMap::new(),
            symbols: HashMap::new(),
            shop_ids: Vec::new(),
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn display_data_falls_back_to_the_iso_code() {
        let mut currency = Currency {
            iso_code: "USD".to_string(),
            ..Default::default()
        };
        currency
            .names
            .insert("en".to_string(), "US Dollar".to_string());

        assert_eq!(currency.display_name("en"), "US Dollar");
        assert_eq!(currency.display_name("fr"), "USD");
        assert_eq!(currency.symbol("en"), "USD");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(value["isoCode"], "USD");
        assert_eq!(value["numericIsoCode"], 840);
        assert_eq!(value["shopIds"], serde_json::json!([1, 2]));
    }
}
