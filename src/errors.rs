use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("invalid term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid property value: {value}")]
    InvalidPropertyValue {
        value: Money,
    },

    #[error("invalid calendar month: {month}")]
    InvalidMonth {
        month: u32,
    },

    #[error("invalid overpayment plan: {message}")]
    InvalidOverpaymentPlan {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, MortgageError>;
