//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than bare equality checks.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_billing::Bill;

/// Asserts that two Money values are approximately equal within a tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {money}"
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {money}");
}

/// Asserts that a bill's derived amounts are internally consistent:
/// subtotal equals the sum of its line totals and the final amount is
/// subtotal minus discount
pub fn assert_bill_consistent(bill: &Bill) {
    let computed = bill
        .items
        .iter()
        .fold(Money::zero(bill.subtotal.currency()), |acc, item| {
            acc + item.line_total()
        });
    assert_eq!(
        bill.subtotal, computed,
        "Bill {} subtotal {} does not match its items' total {}",
        bill.bill_number, bill.subtotal, computed
    );
    assert_eq!(
        bill.final_amount,
        bill.subtotal - bill.discount,
        "Bill {} final amount {} is not subtotal {} minus discount {}",
        bill.bill_number,
        bill.final_amount,
        bill.subtotal,
        bill.discount
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BillFixtures, MoneyFixtures};
    use rust_decimal_macros::dec;

    #[test]
    fn test_approx_eq_within_tolerance() {
        let a = MoneyFixtures::consultation_fee();
        let b = a + Money::new(dec!(0.005), a.currency());
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_approx_eq_outside_tolerance_panics() {
        let a = MoneyFixtures::consultation_fee();
        let b = MoneyFixtures::small_discount();
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    fn test_fixture_bill_is_consistent() {
        assert_bill_consistent(&BillFixtures::paid_consultation_bill());
    }

    #[test]
    fn test_sign_assertions() {
        assert_money_positive(&MoneyFixtures::consultation_fee());
        assert_money_zero(&MoneyFixtures::zero());
    }
}
