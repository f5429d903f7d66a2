//! Bundled reference catalog derived from CLDR currency metadata.

use super::reference_model::ReferenceCurrency;
use super::reference_traits::ReferenceCatalogTrait;
use crate::currencies::DEFAULT_LOCALE;
use crate::errors::Result;

struct CldrRecord {
    iso_code: &'static str,
    numeric_iso_code: Option<u16>,
    decimal_digits: u8,
    symbol: &'static str,
    /// Display names keyed by language subtag; "en" is always present.
    names: &'static [(&'static str, &'static str)],
}

static RECORDS: &[CldrRecord] = &[
    CldrRecord {
        iso_code: "USD",
        numeric_iso_code: Some(840),
        decimal_digits: 2,
        symbol: "$",
        names: &[
            ("en", "US Dollar"),
            ("fr", "dollar des États-Unis"),
            ("de", "US-Dollar"),
            ("es", "dólar estadounidense"),
        ],
    },
    CldrRecord {
        iso_code: "EUR",
        numeric_iso_code: Some(978),
        decimal_digits: 2,
        symbol: "€",
        names: &[("en", "Euro"), ("fr", "euro"), ("de", "Euro"), ("es", "euro")],
    },
    CldrRecord {
        iso_code: "GBP",
        numeric_iso_code: Some(826),
        decimal_digits: 2,
        symbol: "£",
        names: &[
            ("en", "British Pound"),
            ("fr", "livre sterling"),
            ("de", "Britisches Pfund"),
            ("es", "libra esterlina"),
        ],
    },
    CldrRecord {
        iso_code: "JPY",
        numeric_iso_code: Some(392),
        decimal_digits: 0,
        symbol: "¥",
        names: &[
            ("en", "Japanese Yen"),
            ("fr", "yen japonais"),
            ("de", "Japanischer Yen"),
            ("es", "yen japonés"),
        ],
    },
    CldrRecord {
        iso_code: "CHF",
        numeric_iso_code: Some(756),
        decimal_digits: 2,
        symbol: "CHF",
        names: &[
            ("en", "Swiss Franc"),
            ("fr", "franc suisse"),
            ("de", "Schweizer Franken"),
            ("es", "franco suizo"),
        ],
    },
    CldrRecord {
        iso_code: "CAD",
        numeric_iso_code: Some(124),
        decimal_digits: 2,
        symbol: "CA$",
        names: &[
            ("en", "Canadian Dollar"),
            ("fr", "dollar canadien"),
            ("de", "Kanadischer Dollar"),
        ],
    },
    CldrRecord {
        iso_code: "AUD",
        numeric_iso_code: Some(36),
        decimal_digits: 2,
        symbol: "A$",
        names: &[
            ("en", "Australian Dollar"),
            ("fr", "dollar australien"),
            ("de", "Australischer Dollar"),
        ],
    },
    CldrRecord {
        iso_code: "CNY",
        numeric_iso_code: Some(156),
        decimal_digits: 2,
        symbol: "CN¥",
        names: &[
            ("en", "Chinese Yuan"),
            ("fr", "yuan renminbi chinois"),
            ("de", "Renminbi Yuan"),
        ],
    },
    CldrRecord {
        iso_code: "SEK",
        numeric_iso_code: Some(752),
        decimal_digits: 2,
        symbol: "kr",
        names: &[("en", "Swedish Krona"), ("fr", "couronne suédoise")],
    },
    CldrRecord {
        iso_code: "NOK",
        numeric_iso_code: Some(578),
        decimal_digits: 2,
        symbol: "kr",
        names: &[("en", "Norwegian Krone"), ("fr", "couronne norvégienne")],
    },
    CldrRecord {
        iso_code: "DKK",
        numeric_iso_code: Some(208),
        decimal_digits: 2,
        symbol: "kr",
        names: &[("en", "Danish Krone"), ("fr", "couronne danoise")],
    },
    CldrRecord {
        iso_code: "PLN",
        numeric_iso_code: Some(985),
        decimal_digits: 2,
        symbol: "zł",
        names: &[("en", "Polish Zloty"), ("fr", "zloty polonais")],
    },
    CldrRecord {
        iso_code: "CZK",
        numeric_iso_code: Some(203),
        decimal_digits: 2,
        symbol: "Kč",
        names: &[("en", "Czech Koruna"), ("fr", "couronne tchèque")],
    },
    CldrRecord {
        iso_code: "HUF",
        numeric_iso_code: Some(348),
        decimal_digits: 2,
        symbol: "Ft",
        names: &[("en", "Hungarian Forint"), ("fr", "forint hongrois")],
    },
    CldrRecord {
        iso_code: "RON",
        numeric_iso_code: Some(946),
        decimal_digits: 2,
        symbol: "lei",
        names: &[("en", "Romanian Leu"), ("fr", "leu roumain")],
    },
    CldrRecord {
        iso_code: "BGN",
        numeric_iso_code: Some(975),
        decimal_digits: 2,
        symbol: "лв.",
        names: &[("en", "Bulgarian Lev"), ("fr", "lev bulgare")],
    },
    CldrRecord {
        iso_code: "TRY",
        numeric_iso_code: Some(949),
        decimal_digits: 2,
        symbol: "₺",
        names: &[("en", "Turkish Lira"), ("fr", "livre turque")],
    },
    CldrRecord {
        iso_code: "BRL",
        numeric_iso_code: Some(986),
        decimal_digits: 2,
        symbol: "R$",
        names: &[("en", "Brazilian Real"), ("fr", "réal brésilien")],
    },
    CldrRecord {
        iso_code: "MXN",
        numeric_iso_code: Some(484),
        decimal_digits: 2,
        symbol: "MX$",
        names: &[("en", "Mexican Peso"), ("fr", "peso mexicain")],
    },
    CldrRecord {
        iso_code: "INR",
        numeric_iso_code: Some(356),
        decimal_digits: 2,
        symbol: "₹",
        names: &[("en", "Indian Rupee"), ("fr", "roupie indienne")],
    },
    CldrRecord {
        iso_code: "KRW",
        numeric_iso_code: Some(410),
        decimal_digits: 0,
        symbol: "₩",
        names: &[("en", "South Korean Won"), ("fr", "won sud-coréen")],
    },
    CldrRecord {
        iso_code: "SGD",
        numeric_iso_code: Some(702),
        decimal_digits: 2,
        symbol: "S$",
        names: &[("en", "Singapore Dollar"), ("fr", "dollar de Singapour")],
    },
    CldrRecord {
        iso_code: "HKD",
        numeric_iso_code: Some(344),
        decimal_digits: 2,
        symbol: "HK$",
        names: &[("en", "Hong Kong Dollar"), ("fr", "dollar de Hong Kong")],
    },
    CldrRecord {
        iso_code: "NZD",
        numeric_iso_code: Some(554),
        decimal_digits: 2,
        symbol: "NZ$",
        names: &[("en", "New Zealand Dollar"), ("fr", "dollar néo-zélandais")],
    },
    CldrRecord {
        iso_code: "ZAR",
        numeric_iso_code: Some(710),
        decimal_digits: 2,
        symbol: "R",
        names: &[("en", "South African Rand"), ("fr", "rand sud-africain")],
    },
    CldrRecord {
        iso_code: "ILS",
        numeric_iso_code: Some(376),
        decimal_digits: 2,
        symbol: "₪",
        names: &[("en", "Israeli New Shekel"), ("fr", "nouveau shekel israélien")],
    },
    CldrRecord {
        iso_code: "AED",
        numeric_iso_code: Some(784),
        decimal_digits: 2,
        symbol: "AED",
        names: &[("en", "United Arab Emirates Dirham"), ("fr", "dirham des Émirats arabes unis")],
    },
    CldrRecord {
        iso_code: "SAR",
        numeric_iso_code: Some(682),
        decimal_digits: 2,
        symbol: "SAR",
        names: &[("en", "Saudi Riyal"), ("fr", "riyal saoudien")],
    },
    CldrRecord {
        iso_code: "THB",
        numeric_iso_code: Some(764),
        decimal_digits: 2,
        symbol: "฿",
        names: &[("en", "Thai Baht"), ("fr", "baht thaïlandais")],
    },
    CldrRecord {
        iso_code: "UAH",
        numeric_iso_code: Some(980),
        decimal_digits: 2,
        symbol: "₴",
        names: &[("en", "Ukrainian Hryvnia"), ("fr", "hryvnia ukrainienne")],
    },
    CldrRecord {
        iso_code: "BHD",
        numeric_iso_code: Some(48),
        decimal_digits: 3,
        symbol: "BHD",
        names: &[("en", "Bahraini Dinar"), ("fr", "dinar bahreïni")],
    },
    CldrRecord {
        iso_code: "KWD",
        numeric_iso_code: Some(414),
        decimal_digits: 3,
        symbol: "KWD",
        names: &[("en", "Kuwaiti Dinar"), ("fr", "dinar koweïtien")],
    },
    CldrRecord {
        iso_code: "OMR",
        numeric_iso_code: Some(512),
        decimal_digits: 3,
        symbol: "OMR",
        names: &[("en", "Omani Rial"), ("fr", "rial omanais")],
    },
    CldrRecord {
        iso_code: "CLP",
        numeric_iso_code: Some(152),
        decimal_digits: 0,
        symbol: "CLP",
        names: &[("en", "Chilean Peso"), ("fr", "peso chilien")],
    },
    CldrRecord {
        iso_code: "ISK",
        numeric_iso_code: Some(352),
        decimal_digits: 0,
        symbol: "kr",
        names: &[("en", "Icelandic Krona"), ("fr", "couronne islandaise")],
    },
    CldrRecord {
        iso_code: "VND",
        numeric_iso_code: Some(704),
        decimal_digits: 0,
        symbol: "₫",
        names: &[("en", "Vietnamese Dong"), ("fr", "dong vietnamien")],
    },
];

/// Reduces a locale tag to its language subtag ("fr-FR" -> "fr").
fn language_subtag(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(DEFAULT_LOCALE)
}

/// Reference catalog backed by the bundled CLDR-derived dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrCatalog;

impl CldrCatalog {
    pub fn new() -> Self {
        Self
    }

    fn localized_name(record: &CldrRecord, language: &str) -> &'static str {
        record
            .names
            .iter()
            .find(|(locale, _)| *locale == language)
            .or_else(|| {
                record
                    .names
                    .iter()
                    .find(|(locale, _)| *locale == DEFAULT_LOCALE)
            })
            .map(|(_, name)| *name)
            .unwrap_or(record.iso_code)
    }
}

impl ReferenceCatalogTrait for CldrCatalog {
    fn currencies(&self, locale: &str) -> Result<Vec<ReferenceCurrency>> {
        let language = language_subtag(locale);
        Ok(RECORDS
            .iter()
            .map(|record| ReferenceCurrency {
                iso_code: record.iso_code.to_string(),
                numeric_iso_code: record.numeric_iso_code,
                decimal_digits: record.decimal_digits,
                display_name: Self::localized_name(record, language).to_string(),
                symbol: record.symbol.to_string(),
            })
            .collect())
    }
}
