//! Display rounding and discount rules.
//!
//! The rounding conventions are deliberate pricing choices, not float
//! hygiene: headline plan prices land on …49/…99 in EUR/GBP (charm pricing),
//! INR prices land on round hundreds, and small add-on prices stay close to
//! the converted amount. Discounts are applied to the USD base, converted,
//! and rounded exactly once at display time.

use super::currency::Currency;

/// Which convention to round a converted raw amount with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundingStyle {
    /// Headline plan prices: up to the next multiple of 50, minus 1.
    Charm,
    /// Plain round up to the next multiple of 50.
    RoundUp,
    /// À-la-carte add-ons: up to the next multiple of 10.
    AddOn,
}

/// Style applied to every discounted price. Named so discounted and full
/// prices cannot drift onto different conventions one call site at a time.
pub const DISCOUNT_ROUNDING: RoundingStyle = RoundingStyle::RoundUp;

/// Headline rounding, [`RoundingStyle::Charm`].
pub fn round_for_display(currency: Currency, raw: f64) -> u32 {
    round_with_style(currency, RoundingStyle::Charm, raw)
}

/// Rounds `raw` for display in `currency`.
///
/// USD amounts pass through unchanged (catalog prices are integral), and INR
/// rounds up to the next hundred under every style. Zero stays zero
/// everywhere; negative inputs are not a reachable state and clamp to zero.
pub fn round_with_style(currency: Currency, style: RoundingStyle, raw: f64) -> u32 {
    if raw <= 0.0 {
        return 0;
    }
    match currency {
        Currency::Usd => raw.ceil() as u32,
        Currency::Inr => ceil_to(raw, 100),
        Currency::Eur | Currency::Gbp => match style {
            RoundingStyle::Charm => ceil_to(raw, 50) - 1,
            RoundingStyle::RoundUp => ceil_to(raw, 50),
            RoundingStyle::AddOn => ceil_to(raw, 10),
        },
    }
}

fn ceil_to(raw: f64, step: u32) -> u32 {
    (raw / f64::from(step)).ceil() as u32 * step
}

/// `base * (1 - percentage)`, with `percentage` clamped into `[0, 1]`.
///
/// The result is not rounded here; callers feed it to a
/// rounding policy, so discount and currency rounding compose in exactly one
/// place. A zero discount returns the base unchanged.
pub fn apply_discount(base_price: u32, percentage: f64) -> f64 {
    f64::from(base_price) * (1.0 - percentage.clamp(0.0, 1.0))
}

/// Full (undiscounted) plan price in `currency`.
pub fn plan_price(currency: Currency, base_usd: u32) -> u32 {
    round_for_display(currency, currency.convert(f64::from(base_usd)))
}

/// Add-on and care-plan price in `currency`.
pub fn addon_price(currency: Currency, base_usd: u32) -> u32 {
    round_with_style(
        currency,
        RoundingStyle::AddOn,
        currency.convert(f64::from(base_usd)),
    )
}

/// Discounted plan price: discount on the USD base, conversion, then a
/// single [`DISCOUNT_ROUNDING`] pass.
pub fn discounted_plan_price(currency: Currency, base_usd: u32, percentage: f64) -> u32 {
    round_with_style(
        currency,
        DISCOUNT_ROUNDING,
        currency.convert(apply_discount(base_usd, percentage)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::currency::CURRENCIES;

    const STYLES: [RoundingStyle; 3] = [
        RoundingStyle::Charm,
        RoundingStyle::RoundUp,
        RoundingStyle::AddOn,
    ];

    #[test]
    fn usd_is_the_identity() {
        for amount in 0..=3_000 {
            assert_eq!(round_for_display(Currency::Usd, f64::from(amount)), amount);
        }
    }

    #[test]
    fn inr_rounds_up_to_the_smallest_hundred() {
        for raw in 1..=5_000_u32 {
            let rounded = round_for_display(Currency::Inr, f64::from(raw));
            assert_eq!(rounded % 100, 0);
            assert!(rounded >= raw);
            assert!(rounded - 100 < raw, "{rounded} is not the smallest multiple >= {raw}");
        }
    }

    #[test]
    fn charm_prices_end_in_49_or_99() {
        for raw in 1..=4_000_u32 {
            assert_eq!(round_for_display(Currency::Eur, f64::from(raw)) % 50, 49);
            assert_eq!(round_for_display(Currency::Gbp, f64::from(raw)) % 50, 49);
        }
    }

    #[test]
    fn zero_rounds_to_zero_under_every_policy() {
        for currency in CURRENCIES {
            for style in STYLES {
                assert_eq!(round_with_style(currency, style, 0.0), 0);
            }
        }
    }

    #[test]
    fn published_plan_prices() {
        // Figures the pricing page has always shown for the Pro plan.
        assert_eq!(plan_price(Currency::Usd, 699), 699);
        assert_eq!(plan_price(Currency::Eur, 699), 649);
        assert_eq!(plan_price(Currency::Gbp, 699), 549);
        assert_eq!(plan_price(Currency::Inr, 699), 58_800);
    }

    #[test]
    fn addon_prices_round_coarsely() {
        assert_eq!(addon_price(Currency::Usd, 100), 100);
        assert_eq!(addon_price(Currency::Eur, 100), 100);
        assert_eq!(addon_price(Currency::Gbp, 100), 80);
        assert_eq!(addon_price(Currency::Inr, 100), 8_400);
        assert_eq!(addon_price(Currency::Inr, 50), 4_200);
    }

    #[test]
    fn zero_discount_reproduces_the_undiscounted_price() {
        for base in [299, 699, 1_199] {
            assert_eq!(apply_discount(base, 0.0), f64::from(base));
            for currency in CURRENCIES {
                for style in STYLES {
                    let plain = round_with_style(currency, style, currency.convert(f64::from(base)));
                    let discounted =
                        round_with_style(currency, style, currency.convert(apply_discount(base, 0.0)));
                    assert_eq!(discounted, plain);
                }
            }
        }
    }

    #[test]
    fn bigger_discounts_never_raise_the_price() {
        for currency in CURRENCIES {
            let mut previous = u32::MAX;
            for step in 0..=100 {
                let price = discounted_plan_price(currency, 699, f64::from(step) / 100.0);
                assert!(price <= previous, "{currency}: {price} > {previous} at {step}%");
                previous = price;
            }
        }
    }

    #[test]
    fn full_discount_is_free() {
        for currency in CURRENCIES {
            assert_eq!(discounted_plan_price(currency, 699, 1.0), 0);
        }
    }

    #[test]
    fn out_of_range_percentages_clamp() {
        assert_eq!(apply_discount(200, -0.5), 200.0);
        assert_eq!(apply_discount(200, 1.5), 0.0);
    }
}
