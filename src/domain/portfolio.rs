use crate::domain::debt::{Debt, WorkingDebt};
use crate::domain::strategy::Strategy;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// A validated, strategy-ordered working copy of a debt portfolio.
///
/// Only [`Portfolio::validate`] builds one, so holding a `Portfolio` means
/// every rule below has passed:
///
/// * the extra payment is not negative,
/// * there is at least one debt and names are unique,
/// * each balance and minimum payment is positive and each rate non-negative,
/// * each minimum payment exceeds the first month's interest, unless an
///   extra payment is supplied,
/// * the first month's interest, amount owed and payment all fit in a
///   `Decimal`.
#[derive(Debug, PartialEq, Clone)]
pub struct Portfolio {
    strategy: Strategy,
    extra_payment: Decimal,
    debts: Vec<WorkingDebt>,
}

impl Portfolio {
    pub fn validate(
        debts: &[Debt],
        strategy: Strategy,
        extra_payment: Decimal,
    ) -> Result<Self, ValidationError> {
        if extra_payment < Decimal::ZERO {
            return Err(ValidationError::NegativeExtraPayment { extra_payment });
        }
        if debts.is_empty() {
            return Err(ValidationError::EmptyPortfolio);
        }

        let mut seen = HashSet::with_capacity(debts.len());
        for debt in debts {
            validate_debt(debt, extra_payment)?;
            if !seen.insert(debt.name.as_str()) {
                return Err(ValidationError::DuplicateName {
                    debt: debt.name.clone(),
                });
            }
        }

        let mut working: Vec<WorkingDebt> = debts.iter().map(WorkingDebt::from).collect();
        // `sort_by` is stable: ties keep their input order.
        match strategy {
            Strategy::Snowball => working.sort_by(|a, b| a.balance.cmp(&b.balance)),
            Strategy::Avalanche => working.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate)),
        }

        Ok(Self {
            strategy,
            extra_payment,
            debts: working,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn extra_payment(&self) -> Decimal {
        self.extra_payment
    }

    /// Debts in allocation priority order.
    pub fn debts(&self) -> &[WorkingDebt] {
        &self.debts
    }

    pub fn names(&self) -> Vec<String> {
        self.debts.iter().map(|d| d.name.clone()).collect()
    }

    pub fn total_balance(&self) -> Decimal {
        self.debts
            .iter()
            .fold(Decimal::ZERO, |total, d| total.saturating_add(d.balance))
    }
}

fn validate_debt(debt: &Debt, extra_payment: Decimal) -> Result<(), ValidationError> {
    if debt.balance <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveBalance {
            debt: debt.name.clone(),
            balance: debt.balance,
        });
    }
    if debt.interest_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeInterestRate {
            debt: debt.name.clone(),
            interest_rate: debt.interest_rate,
        });
    }
    if debt.min_payment <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveMinPayment {
            debt: debt.name.clone(),
            min_payment: debt.min_payment,
        });
    }

    let too_large = |field, value| ValidationError::AmountTooLarge {
        debt: debt.name.clone(),
        field,
        value,
    };
    let monthly_interest = debt
        .first_month_interest()
        .ok_or_else(|| too_large("balance", debt.balance))?;
    if debt.balance.checked_add(monthly_interest).is_none() {
        return Err(too_large("balance", debt.balance));
    }
    if debt.min_payment.checked_add(extra_payment).is_none() {
        return Err(too_large("min_payment", debt.min_payment));
    }

    if debt.min_payment <= monthly_interest && extra_payment <= Decimal::ZERO {
        return Err(ValidationError::InsufficientMinPayment {
            debt: debt.name.clone(),
            min_payment: debt.min_payment,
            monthly_interest,
            shortfall: monthly_interest - debt.min_payment,
        });
    }
    Ok(())
}
