//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_billing::{BillDraft, BillItem};

/// Strategy for generating valid quantities (1..100)
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..100u32
}

/// Strategy for generating non-negative INR amounts in paise
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000i64
}

/// Strategy for generating non-negative INR Money values
pub fn inr_money_strategy() -> impl Strategy<Value = Money> {
    amount_minor_strategy().prop_map(|minor| Money::from_minor(minor, Currency::INR))
}

/// Strategy for generating offer percentages (0..=100, two decimal places)
pub fn percent_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating a named line item with valid quantity and price
pub fn bill_item_strategy() -> impl Strategy<Value = BillItem> {
    ("[A-Z][a-z]{2,12}", quantity_strategy(), 1i64..1_000_000i64).prop_map(
        |(name, quantity, price_minor)| {
            BillItem::new(name, quantity, Money::from_minor(price_minor, Currency::INR))
        },
    )
}

/// Strategy for generating a submittable bill draft: at least one item and
/// a discount no larger than the subtotal
pub fn bill_draft_strategy() -> impl Strategy<Value = BillDraft> {
    (
        proptest::collection::vec(bill_item_strategy(), 1..8),
        0u32..100u32,
    )
        .prop_map(|(items, discount_percent)| {
            let subtotal = items
                .iter()
                .fold(Money::zero(Currency::INR), |acc, item| {
                    acc + item.line_total()
                });
            let discount =
                subtotal.multiply(Decimal::new(discount_percent as i64, 2));
            BillDraft {
                patient_name: "John Doe".to_string(),
                patient_mobile: "9876543210".to_string(),
                items,
                discount,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_drafts_are_submittable(draft in bill_draft_strategy()) {
            use validator::Validate;
            prop_assert!(draft.validate().is_ok());
        }

        #[test]
        fn generated_drafts_have_non_negative_totals(draft in bill_draft_strategy()) {
            prop_assert!(!draft.compute_total().is_negative());
        }

        #[test]
        fn generated_money_is_non_negative(money in inr_money_strategy()) {
            prop_assert!(!money.is_negative());
        }
    }
}
