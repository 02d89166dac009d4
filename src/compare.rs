//! Side-by-side repayment comparison across candidate interest rates.

use serde::{Deserialize, Serialize};

use crate::calculator::{monthly_capital_repayment, monthly_interest_only_repayment};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::MortgageKind;

/// one rate paired with its monthly repayment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateComparison {
    pub rate: Rate,
    pub repayment: Money,
}

/// compute the monthly repayment for the same principal under each candidate
/// rate, in input order. Duplicate rates each get their own entry; the output
/// is deliberately a sequence rather than a map keyed by rate, which would
/// silently drop them.
pub fn compare_rates(
    principal: Money,
    rates: &[Rate],
    term_months: u32,
    kind: MortgageKind,
) -> Result<Vec<RateComparison>> {
    let mut comparisons = Vec::with_capacity(rates.len());

    for &rate in rates {
        let repayment = match kind {
            MortgageKind::CapitalRepayment => {
                monthly_capital_repayment(principal, rate, term_months)?
            }
            MortgageKind::InterestOnly => monthly_interest_only_repayment(principal, rate)?,
        };

        comparisons.push(RateComparison { rate, repayment });
    }

    Ok(comparisons)
}

/// compare rates for a capital repayment mortgage
pub fn compare_capital_repayment_rates(
    principal: Money,
    rates: &[Rate],
    term_months: u32,
) -> Result<Vec<RateComparison>> {
    compare_rates(principal, rates, term_months, MortgageKind::CapitalRepayment)
}

/// compare rates for an interest only mortgage
pub fn compare_interest_only_rates(
    principal: Money,
    rates: &[Rate],
) -> Result<Vec<RateComparison>> {
    compare_rates(principal, rates, 1, MortgageKind::InterestOnly)
}
