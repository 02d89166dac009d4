//! Immutable mortgage facade.
//!
//! Repayment, total cost and loan-to-value are computed once at
//! construction and held as plain fields. There is no memoization and no
//! setters; repricing builds a new value.

use serde::Serialize;

use crate::calculator::{
    loan_to_value, monthly_capital_repayment, monthly_interest_only_repayment,
    total_cost_of_mortgage,
};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::{LoanTerms, MortgageKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mortgage {
    kind: MortgageKind,
    property_value: Money,
    terms: LoanTerms,
    ltv: i64,
    monthly_repayment: Money,
    total_cost: Money,
}

impl Mortgage {
    /// create a mortgage against a property, computing all derived figures
    pub fn new(kind: MortgageKind, property_value: Money, terms: LoanTerms) -> Result<Self> {
        let deposit = property_value - terms.principal();
        let ltv = loan_to_value(property_value, deposit)?;

        let monthly_repayment = match kind {
            MortgageKind::CapitalRepayment => {
                monthly_capital_repayment(terms.principal(), terms.annual_rate(), terms.term_months())?
            }
            MortgageKind::InterestOnly => {
                monthly_interest_only_repayment(terms.principal(), terms.annual_rate())?
            }
        };

        let total_cost = match kind {
            MortgageKind::CapitalRepayment => {
                total_cost_of_mortgage(terms.principal(), terms.annual_rate(), terms.term_months())?
            }
            MortgageKind::InterestOnly => {
                monthly_repayment * rust_decimal::Decimal::from(terms.term_months())
            }
        };

        Ok(Self {
            kind,
            property_value,
            terms,
            ltv,
            monthly_repayment,
            total_cost,
        })
    }

    pub fn kind(&self) -> MortgageKind {
        self.kind
    }

    pub fn property_value(&self) -> Money {
        self.property_value
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn deposit(&self) -> Money {
        self.property_value - self.terms.principal()
    }

    /// loan to value as a truncated integer percentage
    pub fn ltv(&self) -> i64 {
        self.ltv
    }

    pub fn monthly_repayment(&self) -> Money {
        self.monthly_repayment
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    /// same mortgage repriced at a new rate
    pub fn with_rate(&self, annual_rate: Rate) -> Result<Self> {
        Self::new(self.kind, self.property_value, self.terms.with_rate(annual_rate)?)
    }

    /// same mortgage over a new term
    pub fn with_term(&self, term_months: u32) -> Result<Self> {
        Self::new(self.kind, self.property_value, self.terms.with_term(term_months)?)
    }
}
