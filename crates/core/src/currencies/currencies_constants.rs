//! Constants for currency administration.

/// Length of an alphabetic ISO 4217 currency code.
pub const ISO_CODE_LENGTH: usize = 3;

/// Lowest assignable numeric ISO 4217 code.
pub const NUMERIC_ISO_CODE_MIN: u16 = 1;

/// Highest assignable numeric ISO 4217 code.
pub const NUMERIC_ISO_CODE_MAX: u16 = 999;

/// Decimal precision applied when the reference catalog provides none.
pub const DEFAULT_DECIMAL_DIGITS: u8 = 2;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";
