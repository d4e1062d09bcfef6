//! Currency table for displayed prices.
//!
//! Catalog prices are authored in USD (the reference currency); every other
//! currency is derived through a fixed rate and rounded by the policies in
//! [`super::rounding`]. The set of currencies is closed: the UI only ever
//! offers the four variants below, and exactly one is active at a time.

use std::fmt;

/// A display currency.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
}

/// Every supported currency, in the order the selector lists them.
pub const CURRENCIES: [Currency; 4] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Inr,
];

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
        }
    }

    /// Label shown on the selector button.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Usd => "USD ($)",
            Currency::Eur => "EUR (€)",
            Currency::Gbp => "GBP (£)",
            Currency::Inr => "India (₹)",
        }
    }

    /// Multiplier from USD to this currency. `rate(USD)` is 1 by definition.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.78,
            Currency::Inr => 84.0,
        }
    }

    /// Raw converted amount, before any display rounding.
    pub fn convert(self, amount_usd: f64) -> f64 {
        amount_usd * self.rate()
    }

    /// Defensive lookup. Unrecognised codes fall back to USD instead of
    /// crashing; the closed selector never produces one.
    pub fn from_code(code: &str) -> Self {
        CURRENCIES
            .into_iter()
            .find(|currency| currency.code() == code)
            .unwrap_or_else(|| {
                log::warn!("unknown currency code {code:?}, falling back to USD");
                Currency::Usd
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Symbol plus thousands-grouped integer, e.g. `$1,850` or `₹40,000`.
pub fn format_amount(currency: Currency, amount: u32) -> String {
    format!("{}{}", currency.symbol(), group_thousands(amount))
}

fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_the_reference() {
        assert_eq!(Currency::Usd.rate(), 1.0);
        assert_eq!(Currency::Usd.convert(299.0), 299.0);
    }

    #[test]
    fn rates_are_positive() {
        for currency in CURRENCIES {
            assert!(currency.rate() > 0.0, "{currency} has a non-positive rate");
        }
    }

    #[test]
    fn from_code_round_trips() {
        for currency in CURRENCIES {
            assert_eq!(Currency::from_code(currency.code()), currency);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_usd() {
        assert_eq!(Currency::from_code("JPY"), Currency::Usd);
        assert_eq!(Currency::from_code(""), Currency::Usd);
    }

    #[test]
    fn amounts_are_grouped_in_threes() {
        assert_eq!(format_amount(Currency::Usd, 299), "$299");
        assert_eq!(format_amount(Currency::Usd, 1_850), "$1,850");
        assert_eq!(format_amount(Currency::Inr, 40_000), "₹40,000");
        assert_eq!(format_amount(Currency::Eur, 1_234_567), "€1,234,567");
        assert_eq!(format_amount(Currency::Gbp, 0), "£0");
    }
}
