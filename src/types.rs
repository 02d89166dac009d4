use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};

/// repayment basis of a mortgage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MortgageKind {
    /// each payment covers interest and reduces principal
    CapitalRepayment,
    /// payments cover interest only, principal due at maturity
    InterestOnly,
}

/// immutable terms of a loan.
///
/// Changing a rate or term means constructing a new `LoanTerms`; there are
/// no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
}

impl LoanTerms {
    /// create validated loan terms
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        if !principal.is_positive() {
            return Err(MortgageError::InvalidPrincipal { amount: principal });
        }
        if annual_rate.is_negative() {
            return Err(MortgageError::NegativeRate { rate: annual_rate });
        }
        if term_months == 0 {
            return Err(MortgageError::InvalidTerm { months: term_months });
        }

        Ok(Self {
            principal,
            annual_rate,
            term_months,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// same loan at a different rate
    pub fn with_rate(&self, annual_rate: Rate) -> Result<Self> {
        Self::new(self.principal, annual_rate, self.term_months)
    }

    /// same loan over a different term
    pub fn with_term(&self, term_months: u32) -> Result<Self> {
        Self::new(self.principal, self.annual_rate, term_months)
    }
}

/// overpayment schedule applied on top of the standard repayment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverpaymentPlan {
    monthly_overpayment: Money,
    lump_sum: Money,
    lump_sum_month: u32,
}

impl OverpaymentPlan {
    /// create a validated plan
    pub fn new(monthly_overpayment: Money, lump_sum: Money, lump_sum_month: u32) -> Result<Self> {
        if monthly_overpayment.is_negative() {
            return Err(MortgageError::InvalidOverpaymentPlan {
                message: format!("monthly overpayment cannot be negative: {monthly_overpayment}"),
            });
        }
        if lump_sum.is_negative() {
            return Err(MortgageError::InvalidOverpaymentPlan {
                message: format!("lump sum cannot be negative: {lump_sum}"),
            });
        }
        if lump_sum_month == 0 {
            return Err(MortgageError::InvalidOverpaymentPlan {
                message: "lump sum month must be 1 or later".to_string(),
            });
        }

        Ok(Self {
            monthly_overpayment,
            lump_sum,
            lump_sum_month,
        })
    }

    /// recurring monthly overpayment only
    pub fn monthly(amount: Money) -> Result<Self> {
        Self::new(amount, Money::ZERO, 1)
    }

    /// one-time lump sum at the given month
    pub fn lump_sum(amount: Money, month: u32) -> Result<Self> {
        Self::new(Money::ZERO, amount, month)
    }

    pub fn monthly_overpayment(&self) -> Money {
        self.monthly_overpayment
    }

    pub fn lump_sum_amount(&self) -> Money {
        self.lump_sum
    }

    pub fn lump_sum_month(&self) -> u32 {
        self.lump_sum_month
    }
}

impl Default for OverpaymentPlan {
    fn default() -> Self {
        Self {
            monthly_overpayment: Money::ZERO,
            lump_sum: Money::ZERO,
            lump_sum_month: 1,
        }
    }
}
