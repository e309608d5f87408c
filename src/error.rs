use rust_decimal::Decimal;
use thiserror::Error;

/// A rejected debt portfolio.
///
/// Every variant names the offending field and, where one exists, the debt.
/// Validation always happens before a simulation starts, so a
/// `ValidationError` never comes with a partial ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("At least one debt is required")]
    EmptyPortfolio,
    #[error("Extra payment cannot be negative (got {extra_payment})")]
    NegativeExtraPayment { extra_payment: Decimal },
    #[error("Debt '{debt}' must have a positive balance (got {balance})")]
    NonPositiveBalance { debt: String, balance: Decimal },
    #[error("Debt '{debt}' interest rate cannot be negative (got {interest_rate})")]
    NegativeInterestRate { debt: String, interest_rate: Decimal },
    #[error("Debt '{debt}' must have a positive minimum payment (got {min_payment})")]
    NonPositiveMinPayment { debt: String, min_payment: Decimal },
    #[error("Debt name '{debt}' appears more than once")]
    DuplicateName { debt: String },
    #[error("Debt '{debt}': {field} {value} is too large to simulate")]
    AmountTooLarge {
        debt: String,
        field: &'static str,
        value: Decimal,
    },
    #[error(
        "Debt '{debt}': minimum payment ${min_payment:.2} does not cover monthly interest \
         ${monthly_interest:.2} (short by ${shortfall:.2}). Add extra payment to pay off this debt."
    )]
    InsufficientMinPayment {
        debt: String,
        min_payment: Decimal,
        monthly_interest: Decimal,
        shortfall: Decimal,
    },
}

impl ValidationError {
    /// Name of the input field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyPortfolio => "debts",
            ValidationError::NegativeExtraPayment { .. } => "extra_payment",
            ValidationError::NonPositiveBalance { .. } => "balance",
            ValidationError::NegativeInterestRate { .. } => "interest_rate",
            ValidationError::NonPositiveMinPayment { .. }
            | ValidationError::InsufficientMinPayment { .. } => "min_payment",
            ValidationError::DuplicateName { .. } => "name",
            ValidationError::AmountTooLarge { field, .. } => *field,
        }
    }

    /// Name of the offending debt, if the failure belongs to a single debt.
    pub fn debt(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyPortfolio | ValidationError::NegativeExtraPayment { .. } => None,
            ValidationError::NonPositiveBalance { debt, .. }
            | ValidationError::NegativeInterestRate { debt, .. }
            | ValidationError::NonPositiveMinPayment { debt, .. }
            | ValidationError::DuplicateName { debt }
            | ValidationError::AmountTooLarge { debt, .. }
            | ValidationError::InsufficientMinPayment { debt, .. } => Some(debt),
        }
    }
}

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Unknown payoff strategy '{0}' (expected 'snowball' or 'avalanche')")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
