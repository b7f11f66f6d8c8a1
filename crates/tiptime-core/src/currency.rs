//! Locale currency formatting.
//!
//! `CurrencyFormatter` is the seam the calculator formats through.
//! `CurrencyFormat` is the table-driven implementation backed by the
//! conventions in [`crate::locale`].

/// Formats an amount as a currency string.
pub trait CurrencyFormatter: Send + Sync {
    /// Format `amount` in this formatter's currency.
    fn format(&self, amount: f64) -> String;

    /// ISO 4217 currency code.
    fn code(&self) -> &str;

    /// Locale tag the formatter was built for.
    fn locale(&self) -> &str;
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub locale: &'static str,
    pub code: &'static str,
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Inserted between symbol and number.
    pub symbol_separator: &'static str,
    /// Minor-unit digits printed after the decimal separator.
    pub fraction_digits: usize,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
}

impl CurrencyFormat {
    /// Format the number part only, without symbol or sign.
    fn format_number(&self, magnitude: f64) -> String {
        if magnitude.is_infinite() {
            return "∞".to_string();
        }
        let fixed = format!("{:.*}", self.fraction_digits, magnitude);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_thousands(int_part, self.group_separator);
        if let Some(frac) = frac_part {
            number.push_str(self.decimal_separator);
            number.push_str(frac);
        }
        number
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(&self, amount: f64) -> String {
        let number = self.format_number(amount.abs());
        // A value that prints as zero never carries a sign.
        let negative = amount < 0.0
            && (amount.is_infinite() || number.bytes().any(|b| matches!(b, b'1'..=b'9')));

        let body = match self.position {
            SymbolPosition::Prefix => {
                format!("{}{}{number}", self.symbol, self.symbol_separator)
            }
            SymbolPosition::Suffix => {
                format!("{number}{}{}", self.symbol_separator, self.symbol)
            }
        };

        if negative {
            format!("-{body}")
        } else {
            body
        }
    }

    fn code(&self) -> &str {
        self.code
    }

    fn locale(&self) -> &str {
        self.locale
    }
}

/// Insert `separator` between every group of three integer digits.
#[must_use]
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + (len / 3) * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}
