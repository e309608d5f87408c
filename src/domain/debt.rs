use crate::domain::ledger::DebtMonth;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Decimal places carried by a month's interest charge.
///
/// Keeps every balance, payment and principal sum well inside `Decimal`'s
/// 28 significant digits, so the ledger arithmetic stays exact.
pub const INTEREST_SCALE: u32 = 10;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly interest on `balance` at a nominal annual percentage rate.
///
/// `None` when `balance * annual_rate` leaves `Decimal`'s range.
pub fn monthly_interest(balance: Decimal, annual_rate: Decimal) -> Option<Decimal> {
    let yearly = balance.checked_mul(annual_rate)?;
    Some((yearly / PERCENT / MONTHS_PER_YEAR).round_dp(INTEREST_SCALE))
}

/// A named, balance-bearing obligation as supplied by the caller.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Debt {
    /// Identifier, unique within a portfolio.
    pub name: String,
    /// Outstanding amount.
    pub balance: Decimal,
    /// Nominal annual percentage rate, e.g. `19.99`.
    pub interest_rate: Decimal,
    /// Required payment per month.
    pub min_payment: Decimal,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
        min_payment: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            balance,
            interest_rate,
            min_payment,
        }
    }

    /// Interest charged in the first simulated month.
    pub fn first_month_interest(&self) -> Option<Decimal> {
        monthly_interest(self.balance, self.interest_rate)
    }
}

/// A simulation-owned copy of a [`Debt`].
///
/// Never shares storage with the caller's input; the simulation replaces it
/// with the result of [`WorkingDebt::settle`] each month.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct WorkingDebt {
    pub name: String,
    pub balance: Decimal,
    pub interest_rate: Decimal,
    pub min_payment: Decimal,
}

/// Outcome of settling one debt for one month.
#[derive(Debug, PartialEq, Clone)]
pub struct Settlement {
    /// The debt after this month's payment.
    pub debt: WorkingDebt,
    /// What was paid and charged this month.
    pub line: DebtMonth,
    /// Extra-payment pool left for the next debt in priority order.
    pub pool: Decimal,
}

impl From<&Debt> for WorkingDebt {
    fn from(debt: &Debt) -> Self {
        Self {
            name: debt.name.clone(),
            balance: debt.balance,
            interest_rate: debt.interest_rate,
            min_payment: debt.min_payment,
        }
    }
}

impl WorkingDebt {
    pub fn is_paid_off(&self) -> bool {
        self.balance <= Decimal::ZERO
    }

    pub fn monthly_interest(&self) -> Option<Decimal> {
        monthly_interest(self.balance, self.interest_rate)
    }

    /// Settles one month for this debt given the pool still unallocated.
    ///
    /// A debt whose minimum payment covers everything owed pays exactly what
    /// it owes. Otherwise it pays its minimum plus the whole remaining pool,
    /// capped at what it owes. The pool is charged only for the part of the
    /// payment above `interest + min_payment`, and whatever is left moves on
    /// to the next debt in the same month.
    ///
    /// Returns `None` if any amount would leave `Decimal`'s range, which can
    /// only happen to a balance that grows month after month.
    pub fn settle(&self, pool: Decimal) -> Option<Settlement> {
        if self.is_paid_off() {
            return Some(Settlement {
                debt: self.clone(),
                line: DebtMonth::idle(&self.name),
                pool,
            });
        }

        let interest = self.monthly_interest()?;
        let owed = self.balance.checked_add(interest)?;
        let payment = if owed <= self.min_payment {
            owed
        } else {
            self.min_payment
                .checked_add(pool.max(Decimal::ZERO))?
                .min(owed)
        };

        let principal = payment.checked_sub(interest)?;
        let consumed = principal
            .checked_sub(self.min_payment)?
            .max(Decimal::ZERO);
        let balance = if payment == owed {
            Decimal::ZERO
        } else {
            self.balance.checked_sub(principal)?
        };

        Some(Settlement {
            debt: WorkingDebt {
                balance,
                ..self.clone()
            },
            line: DebtMonth {
                name: self.name.clone(),
                balance,
                payment,
                interest,
                principal,
            },
            pool: pool - consumed,
        })
    }
}
