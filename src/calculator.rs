//! Closed-form mortgage repayment and interest formulas.
//!
//! Every function is pure and rounds its monetary result to currency
//! precision at the boundary; callers never see unrounded values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::dates::{days_in_month, days_in_year};
use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};

/// monthly repayment for a capital repayment mortgage.
///
/// repayment = P * (r(1+r)^n) / ((1+r)^n - 1), with r the monthly rate
/// fraction and n the term in months. A zero rate degenerates to straight
/// principal division.
pub fn monthly_capital_repayment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Money> {
    if term_months == 0 {
        return Err(MortgageError::InvalidTerm { months: term_months });
    }
    if annual_rate.is_negative() {
        return Err(MortgageError::NegativeRate { rate: annual_rate });
    }

    let r = annual_rate.monthly();

    if r.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    // (1 + r)^n by iterative multiplication
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}

/// total cost of a capital repayment mortgage over its full term,
/// assuming the rate never changes
pub fn total_cost_of_mortgage(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Money> {
    let monthly = monthly_capital_repayment(principal, annual_rate, term_months)?;
    Ok(monthly * Decimal::from(term_months))
}

/// monthly repayment for an interest only mortgage
pub fn monthly_interest_only_repayment(principal: Money, annual_rate: Rate) -> Result<Money> {
    if annual_rate.is_negative() {
        return Err(MortgageError::NegativeRate { rate: annual_rate });
    }

    Ok(Money::from_decimal(
        principal.as_decimal() * annual_rate.as_decimal() / Decimal::from(12),
    ))
}

/// loan to value as a truncated integer percentage
pub fn loan_to_value(property_value: Money, deposit: Money) -> Result<i64> {
    if !property_value.is_positive() {
        return Err(MortgageError::InvalidPropertyValue {
            value: property_value,
        });
    }

    let loan_fraction = Decimal::ONE - deposit.as_decimal() / property_value.as_decimal();

    // truncation toward zero, not rounding
    Ok((loan_fraction * Decimal::from(100)).trunc().to_i64().unwrap_or(0))
}

/// day-weighted interest accrued over one calendar month.
///
/// Month length comes from a fixed non-leap lookup; the year only selects
/// the 365/366-day denominator. The sign of `balance` propagates, so a
/// credit balance yields negative interest.
pub fn monthly_interest_accrual(
    balance: Money,
    annual_rate: Rate,
    month: u32,
    year: i32,
) -> Result<Money> {
    if annual_rate.is_negative() {
        return Err(MortgageError::NegativeRate { rate: annual_rate });
    }

    let month_days = days_in_month(month).ok_or(MortgageError::InvalidMonth { month })?;
    let year_days = days_in_year(year);

    let interest = balance.as_decimal() * annual_rate.as_decimal() / Decimal::from(year_days)
        * Decimal::from(month_days);

    Ok(Money::from_decimal(interest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn mortgage() -> Money {
        Money::from_major(130_500)
    }

    #[test]
    fn test_repayment_calculator() {
        let repayment =
            monthly_capital_repayment(mortgage(), Rate::from_percentage(dec!(3.89)), 300).unwrap();
        assert_eq!(repayment, Money::from_str_exact("680.93").unwrap());

        let repayment =
            monthly_capital_repayment(mortgage(), Rate::from_percentage(dec!(6.89)), 300).unwrap();
        assert_eq!(repayment, Money::from_str_exact("913.21").unwrap());
    }

    #[test]
    fn test_repayment_calculator_zero_rate() {
        let repayment =
            monthly_capital_repayment(Money::from_major(120_000), Rate::ZERO, 240).unwrap();
        assert_eq!(repayment, Money::from_major(500));
    }

    #[test]
    fn test_repayment_calculator_rejects_bad_domain() {
        let err = monthly_capital_repayment(mortgage(), Rate::from_percentage(dec!(3.89)), 0)
            .unwrap_err();
        assert!(matches!(err, MortgageError::InvalidTerm { months: 0 }));

        let err = monthly_capital_repayment(mortgage(), Rate::from_percentage(dec!(-1)), 300)
            .unwrap_err();
        assert!(matches!(err, MortgageError::NegativeRate { .. }));
    }

    #[test]
    fn test_total_cost_of_mortgage() {
        let total =
            total_cost_of_mortgage(mortgage(), Rate::from_percentage(dec!(6.89)), 300).unwrap();
        assert_eq!(total, Money::from_major(273_963));
    }

    #[test]
    fn test_total_cost_is_monthly_times_term() {
        for (rate, term) in [(dec!(1.0), 120u32), (dec!(3.89), 300), (dec!(0), 60)] {
            let rate = Rate::from_percentage(rate);
            let monthly = monthly_capital_repayment(mortgage(), rate, term).unwrap();
            let total = total_cost_of_mortgage(mortgage(), rate, term).unwrap();
            assert_eq!(total, monthly * Decimal::from(term));
        }
    }

    #[test]
    fn test_interest_only_calculator() {
        let repayment =
            monthly_interest_only_repayment(mortgage(), Rate::from_percentage(dec!(3.89))).unwrap();
        assert_eq!(repayment, Money::from_str_exact("423.04").unwrap());
    }

    #[test]
    fn test_ltv_calculator() {
        assert_eq!(
            loan_to_value(Money::from_major(100_000), Money::from_major(50_000)).unwrap(),
            50
        );
    }

    #[test]
    fn test_ltv_truncates_not_rounds() {
        // 1 - 50000/130500 = 0.6169... -> 61, never 62
        assert_eq!(
            loan_to_value(Money::from_major(130_500), Money::from_major(50_000)).unwrap(),
            61
        );
    }

    #[test]
    fn test_ltv_rejects_non_positive_property_value() {
        let err = loan_to_value(Money::ZERO, Money::from_major(50_000)).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidPropertyValue { .. }));
    }

    #[test]
    fn test_monthly_interest() {
        let rate = Rate::from_percentage(dec!(1.89));

        let september_balance = Money::from_str_exact("99276.93").unwrap();
        let october_interest = monthly_interest_accrual(september_balance, rate, 9, 2023).unwrap();
        assert_eq!(october_interest, Money::from_str_exact("154.22").unwrap());

        let october_balance = Money::from_str_exact("98868.70").unwrap();
        let november_interest = monthly_interest_accrual(october_balance, rate, 10, 2023).unwrap();
        assert_eq!(november_interest, Money::from_str_exact("158.70").unwrap());
    }

    #[test]
    fn test_monthly_interest_sign_propagates() {
        let rate = Rate::from_percentage(dec!(1.89));

        let credit = Money::from_str_exact("-99276.93").unwrap();
        let interest = monthly_interest_accrual(credit, rate, 9, 2023).unwrap();
        assert_eq!(interest, Money::from_str_exact("-154.22").unwrap());

        let credit = Money::from_str_exact("-98868.70").unwrap();
        let interest = monthly_interest_accrual(credit, rate, 10, 2023).unwrap();
        assert_eq!(interest, Money::from_str_exact("-158.70").unwrap());
    }

    #[test]
    fn test_monthly_interest_leap_year_denominator() {
        let balance = Money::from_major(100_000);
        let rate = Rate::from_percentage(dec!(5));

        let leap = monthly_interest_accrual(balance, rate, 1, 2024).unwrap();
        let non_leap = monthly_interest_accrual(balance, rate, 1, 2023).unwrap();
        assert!(leap < non_leap);

        // february is always the fixed 28 days, leap year or not
        let feb_leap = monthly_interest_accrual(balance, rate, 2, 2024).unwrap();
        assert_eq!(feb_leap, Money::from_decimal(dec!(100000) * dec!(0.05) / dec!(366) * dec!(28)));
    }

    #[test]
    fn test_monthly_interest_rejects_bad_month() {
        let err = monthly_interest_accrual(Money::from_major(1), Rate::ZERO, 13, 2023).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidMonth { month: 13 }));
    }

    #[test]
    fn test_calculators_are_pure() {
        let rate = Rate::from_percentage(dec!(3.89));
        assert_eq!(
            monthly_capital_repayment(mortgage(), rate, 300).unwrap(),
            monthly_capital_repayment(mortgage(), rate, 300).unwrap(),
        );
        assert_eq!(
            monthly_interest_accrual(mortgage(), rate, 6, 2023).unwrap(),
            monthly_interest_accrual(mortgage(), rate, 6, 2023).unwrap(),
        );
    }
}
