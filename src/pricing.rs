// ABOUTME: Pure quote computation from form data and organization pricing rules

use rust_decimal::{Decimal, RoundingStrategy};

use crate::api::types::OrgConfig;
use crate::models::{ExtraKind, FormData, Quote};

/// Compute a quote from the current form and the loaded configuration.
///
/// `price = round2(base + extras_total - discount)` where the discount is the
/// frequency percentage of the subtotal (zero for One-off). Amounts are
/// rounded half-up to 2 decimal places. Configuration is assumed well-formed;
/// there are no error paths.
pub fn compute_quote(form: &FormData, config: &OrgConfig) -> Quote {
    let base = config.pricing.base_for(form.lawn_size);

    // Unrecognized extra labels have no priced category and contribute zero.
    let extras_total: Decimal = form
        .extras
        .iter()
        .filter_map(|label| ExtraKind::from_label(label))
        .map(|kind| config.pricing.extra_cost(kind))
        .sum();

    let subtotal = base + extras_total;
    let discount = round2(subtotal * config.pricing.discount_percent(form.frequency) / Decimal::ONE_HUNDRED);
    let price = round2(subtotal - discount);

    Quote {
        price,
        duration_minutes: form.lawn_size.duration_minutes(),
        base,
        extras_total,
        discount,
    }
}

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PricingTable;
    use crate::models::{Frequency, LawnSize};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn test_config() -> OrgConfig {
        OrgConfig {
            business_name: "GreenBlade Lawn Care".into(),
            currency: "£".into(),
            services: Vec::new(),
            extras: vec![
                "Fertilizer Treatment".into(),
                "Edging".into(),
                "Weeding".into(),
                "Leaf Cleanup".into(),
            ],
            pricing: PricingTable {
                small: dec!(25),
                medium: dec!(40),
                large: dec!(60),
                estate: dec!(120),
                extra_fertilizer: dec!(10),
                extra_edging: dec!(8),
                extra_weeding: dec!(12),
                extra_leaf_cleanup: dec!(15),
                weekly_discount: dec!(15),
                fortnightly_discount: dec!(12),
                monthly_discount: dec!(10),
            },
        }
    }

    fn large_monthly_form() -> FormData {
        FormData {
            lawn_size: LawnSize::Large,
            frequency: Frequency::Monthly,
            extras: vec!["Fertilizer Treatment".into(), "Edging".into()],
            ..FormData::default()
        }
    }

    #[test]
    fn test_large_monthly_with_extras() {
        let quote = compute_quote(&large_monthly_form(), &test_config());

        assert_eq!(quote.base, dec!(60));
        assert_eq!(quote.extras_total, dec!(18));
        assert_eq!(quote.discount, dec!(7.80));
        assert_eq!(quote.price, dec!(70.20));
        assert_eq!(quote.duration_minutes, 90);
    }

    #[test]
    fn test_one_off_has_no_discount() {
        let mut form = large_monthly_form();
        form.frequency = Frequency::OneOff;

        let quote = compute_quote(&form, &test_config());

        assert_eq!(quote.discount, dec!(0));
        assert_eq!(quote.price, dec!(78.00));
    }

    #[test]
    fn test_price_identity_holds() {
        for frequency in Frequency::all() {
            for size in LawnSize::all() {
                let form = FormData {
                    lawn_size: *size,
                    frequency: *frequency,
                    extras: vec!["Weeding".into(), "Leaf Cleanup".into()],
                    ..FormData::default()
                };
                let quote = compute_quote(&form, &test_config());

                assert_eq!(
                    quote.price,
                    round2(quote.base + quote.extras_total - quote.discount)
                );
                if *frequency == Frequency::OneOff {
                    assert_eq!(quote.discount, dec!(0));
                }
            }
        }
    }

    #[test]
    fn test_unrecognized_extra_is_free() {
        let mut form = large_monthly_form();
        form.extras = vec!["Gnome Arrangement".into(), "Edging".into()];

        let quote = compute_quote(&form, &test_config());

        assert_eq!(quote.extras_total, dec!(8));
    }

    #[test]
    fn test_tier_durations() {
        for (size, minutes) in [
            (LawnSize::Small, 30),
            (LawnSize::Medium, 45),
            (LawnSize::Large, 90),
            (LawnSize::Estate, 180),
        ] {
            let form = FormData {
                lawn_size: size,
                ..FormData::default()
            };
            assert_eq!(compute_quote(&form, &test_config()).duration_minutes, minutes);
        }
    }

    #[test]
    fn test_rounding_is_half_up() {
        // The fixed rounding rule: midpoints round away from zero
        assert_eq!(round2(dec!(7.005)), dec!(7.01));
        assert_eq!(round2(dec!(7.004)), dec!(7.00));
    }
}
