//! Month-by-month projection of a capital repayment mortgage under an
//! overpayment plan.

use chrono::Datelike;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::calculator::{monthly_capital_repayment, monthly_interest_accrual};
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{LoanTerms, OverpaymentPlan};

/// outcome of an overpayment projection.
///
/// A `final_balance` above zero is a normal terminal state: the payments
/// never cleared the balance within the original term. It is reported,
/// not raised as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverpaymentProjection {
    pub months_to_repay: u32,
    pub time_saved_months: u32,
    pub total_interest_paid: Money,
    pub final_balance: Money,
}

impl OverpaymentProjection {
    /// simulate the loan balance month by month, applying interest accrual,
    /// the standard payment, any recurring overpayment, and a one-time lump
    /// sum. The starting calendar date comes from the injected clock.
    ///
    /// The loop is bounded by the original term, so an insufficient payment
    /// cannot spin forever.
    pub fn project(
        terms: &LoanTerms,
        plan: &OverpaymentPlan,
        time_provider: &SafeTimeProvider,
    ) -> Result<Self> {
        // standard payment is fixed against the original terms, never
        // recomputed against the remaining balance
        let standard_payment =
            monthly_capital_repayment(terms.principal(), terms.annual_rate(), terms.term_months())?;

        let now = time_provider.now();
        let mut month = now.month();
        let mut year = now.year();

        let mut remaining_balance = terms.principal();
        let mut months_elapsed = 0u32;
        let mut total_interest_paid = Money::ZERO;

        while remaining_balance > Money::ZERO {
            months_elapsed += 1;

            if months_elapsed == plan.lump_sum_month() {
                remaining_balance -= plan.lump_sum_amount();
                if remaining_balance < Money::ZERO {
                    // lump sum clears the loan mid-tick; no accrual this month
                    remaining_balance = Money::ZERO;
                    break;
                }
            }

            // every in-loop month is treated as 31 days to avoid calendar
            // drift; the tracked year still selects the 365/366 denominator
            let interest =
                monthly_interest_accrual(remaining_balance, terms.annual_rate(), 1, year)?;
            total_interest_paid += interest;

            let mut total_payment = standard_payment + plan.monthly_overpayment();
            if remaining_balance < total_payment {
                // final payment clears the balance exactly
                total_payment = remaining_balance + interest;
            }

            remaining_balance = remaining_balance + interest - total_payment;

            if months_elapsed >= terms.term_months() {
                break;
            }

            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Ok(Self {
            months_to_repay: months_elapsed,
            time_saved_months: terms.term_months() - months_elapsed,
            total_interest_paid,
            final_balance: remaining_balance,
        })
    }
}
