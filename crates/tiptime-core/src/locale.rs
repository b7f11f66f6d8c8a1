//! Locale resolution and the table of known currency conventions.

use crate::calculator::TipError;
use crate::constants::{DEFAULT_LOCALE, LOCALE_ENV_VARS};
use crate::currency::{CurrencyFormat, SymbolPosition};

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Known locales. The first entry for a language is its bare-language match.
pub const FORMATS: &[CurrencyFormat] = &[
    CurrencyFormat {
        locale: "en-US",
        code: "USD",
        symbol: "$",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 2,
        decimal_separator: ".",
        group_separator: ",",
    },
    CurrencyFormat {
        locale: "en-GB",
        code: "GBP",
        symbol: "£",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 2,
        decimal_separator: ".",
        group_separator: ",",
    },
    CurrencyFormat {
        locale: "en-CA",
        code: "CAD",
        symbol: "$",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 2,
        decimal_separator: ".",
        group_separator: ",",
    },
    CurrencyFormat {
        locale: "en-AU",
        code: "AUD",
        symbol: "$",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 2,
        decimal_separator: ".",
        group_separator: ",",
    },
    CurrencyFormat {
        locale: "de-DE",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::Suffix,
        symbol_separator: NBSP,
        fraction_digits: 2,
        decimal_separator: ",",
        group_separator: ".",
    },
    CurrencyFormat {
        locale: "fr-FR",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::Suffix,
        symbol_separator: NBSP,
        fraction_digits: 2,
        decimal_separator: ",",
        group_separator: NARROW_NBSP,
    },
    CurrencyFormat {
        locale: "it-IT",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::Suffix,
        symbol_separator: NBSP,
        fraction_digits: 2,
        decimal_separator: ",",
        group_separator: ".",
    },
    CurrencyFormat {
        locale: "pt-BR",
        code: "BRL",
        symbol: "R$",
        position: SymbolPosition::Prefix,
        symbol_separator: NBSP,
        fraction_digits: 2,
        decimal_separator: ",",
        group_separator: ".",
    },
    CurrencyFormat {
        locale: "ja-JP",
        code: "JPY",
        symbol: "¥",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 0,
        decimal_separator: ".",
        group_separator: ",",
    },
    CurrencyFormat {
        locale: "zh-CN",
        code: "CNY",
        symbol: "¥",
        position: SymbolPosition::Prefix,
        symbol_separator: "",
        fraction_digits: 2,
        decimal_separator: ".",
        group_separator: ",",
    },
];

/// Normalize a POSIX or BCP-47 style tag to `ll-CC` form.
///
/// `en_US.UTF-8` and `de_DE@euro` become `en-US` and `de-DE`;
/// `C` and `POSIX` become the default locale.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let base = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return DEFAULT_LOCALE.to_string();
    }

    let mut parts = base.splitn(2, '-');
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            format!("{language}-{}", region.to_ascii_uppercase())
        }
        _ => language,
    }
}

/// Look up the currency conventions for a locale tag.
pub fn lookup(tag: &str) -> Result<CurrencyFormat, TipError> {
    let normalized = normalize_tag(tag);
    if normalized.is_empty() {
        return Err(TipError::UnknownLocale(tag.to_string()));
    }

    if let Some(format) = FORMATS.iter().find(|f| f.locale == normalized) {
        return Ok(*format);
    }

    // Bare language, or a region we do not know: first entry of the language.
    let language = normalized.split('-').next().unwrap_or_default();
    FORMATS
        .iter()
        .find(|f| f.locale.split('-').next() == Some(language))
        .copied()
        .ok_or_else(|| TipError::UnknownLocale(tag.to_string()))
}

/// Resolve the active locale from `LC_ALL`, `LC_MONETARY`, then `LANG`.
#[must_use]
pub fn detect() -> CurrencyFormat {
    detect_with(|name| std::env::var(name).ok())
}

/// Resolve the active locale using `var` to read environment variables.
pub fn detect_with<F>(var: F) -> CurrencyFormat
where
    F: Fn(&str) -> Option<String>,
{
    for name in LOCALE_ENV_VARS {
        let Some(value) = var(name).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        match lookup(&value) {
            Ok(format) => {
                tracing::debug!(env = name, value = %value, locale = format.locale, "resolved locale");
                return format;
            }
            Err(_) => {
                tracing::debug!(env = name, value = %value, "ignoring unknown locale");
            }
        }
    }

    tracing::debug!(locale = DEFAULT_LOCALE, "no locale in environment, using default");
    default_format()
}

/// Conventions of the default locale.
#[must_use]
pub fn default_format() -> CurrencyFormat {
    FORMATS[0]
}

/// List all known locale tags.
#[must_use]
pub fn available() -> Vec<&'static str> {
    FORMATS.iter().map(|f| f.locale).collect()
}
