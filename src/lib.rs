pub mod calculator;
pub mod compare;
pub mod dates;
pub mod decimal;
pub mod errors;
pub mod mortgage;
pub mod projection;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use calculator::{
    loan_to_value, monthly_capital_repayment, monthly_interest_accrual,
    monthly_interest_only_repayment, total_cost_of_mortgage,
};
pub use compare::{
    compare_capital_repayment_rates, compare_interest_only_rates, compare_rates, RateComparison,
};
pub use dates::{days_in_month, days_in_year, is_leap_year, term_between, TermLength};
pub use mortgage::Mortgage;
pub use projection::OverpaymentProjection;
pub use types::{LoanTerms, MortgageKind, OverpaymentPlan};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
