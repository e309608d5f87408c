use crate::domain::strategy::Strategy;
use rust_decimal::Decimal;
use serde::Serialize;

pub const MONTH_COLUMN: &str = "Month";
pub const TOTAL_PAYMENT_COLUMN: &str = "Total Payment";
pub const TOTAL_INTEREST_COLUMN: &str = "Total Interest Paid";

const DEBT_PREFIX: &str = "Debt ";
const BALANCE_SUFFIX: &str = " Balance";

pub fn balance_column(name: &str) -> String {
    format!("{DEBT_PREFIX}{name}{BALANCE_SUFFIX}")
}

pub fn payment_column(name: &str) -> String {
    format!("{DEBT_PREFIX}{name} Payment")
}

pub fn interest_column(name: &str) -> String {
    format!("{DEBT_PREFIX}{name} Interest")
}

/// Chart label for a per-debt balance column: `"Debt Visa Balance"` -> `"Visa"`.
pub fn series_label(column: &str) -> &str {
    let label = column.strip_prefix(DEBT_PREFIX).unwrap_or(column);
    label.strip_suffix(BALANCE_SUFFIX).unwrap_or(label)
}

/// One debt's line within a month.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DebtMonth {
    pub name: String,
    /// Balance after this month's payment.
    pub balance: Decimal,
    pub payment: Decimal,
    pub interest: Decimal,
    /// `payment - interest`.
    pub principal: Decimal,
}

impl DebtMonth {
    /// Line for a debt that was already paid off before this month.
    pub fn idle(name: &str) -> Self {
        Self {
            name: name.to_string(),
            balance: Decimal::ZERO,
            payment: Decimal::ZERO,
            interest: Decimal::ZERO,
            principal: Decimal::ZERO,
        }
    }
}

/// One row of the payoff ledger.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct MonthlyRecord {
    /// 1-based month index.
    pub month: u32,
    /// Every debt in strategy order, paid-off debts included.
    pub debts: Vec<DebtMonth>,
    pub total_payment: Decimal,
    /// Cumulative interest across the whole portfolio up to and including this month.
    pub total_interest_paid: Decimal,
}

impl MonthlyRecord {
    /// The record as a flat column-name to value mapping.
    pub fn columns(&self) -> Vec<(String, Decimal)> {
        let mut columns = Vec::with_capacity(3 + self.debts.len() * 3);
        columns.push((MONTH_COLUMN.to_string(), Decimal::from(self.month)));
        columns.push((TOTAL_PAYMENT_COLUMN.to_string(), self.total_payment));
        columns.push((TOTAL_INTEREST_COLUMN.to_string(), self.total_interest_paid));
        for debt in &self.debts {
            columns.push((balance_column(&debt.name), debt.balance));
            columns.push((payment_column(&debt.name), debt.payment));
            columns.push((interest_column(&debt.name), debt.interest));
        }
        columns
    }

    pub fn debt(&self, name: &str) -> Option<&DebtMonth> {
        self.debts.iter().find(|d| d.name == name)
    }
}

/// How a simulation ended.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Every balance reached zero.
    Done,
    /// The simulation stopped with some balance still open: either the month
    /// ceiling was hit or a growing balance outran the decimal range.
    CeilingReached,
}

/// The full result of a payoff simulation.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PayoffPlan {
    pub strategy: Strategy,
    pub extra_payment: Decimal,
    /// Debt names in allocation priority order.
    pub order: Vec<String>,
    pub records: Vec<MonthlyRecord>,
    pub status: PlanStatus,
}

impl PayoffPlan {
    pub fn months(&self) -> usize {
        self.records.len()
    }

    pub fn is_debt_free(&self) -> bool {
        self.status == PlanStatus::Done
    }

    pub fn total_interest(&self) -> Decimal {
        self.records
            .last()
            .map_or(Decimal::ZERO, |r| r.total_interest_paid)
    }

    pub fn total_paid(&self) -> Decimal {
        self.records
            .iter()
            .fold(Decimal::ZERO, |total, r| total.saturating_add(r.total_payment))
    }

    /// First month in which the named debt's balance is zero.
    pub fn payoff_month(&self, name: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|r| r.debt(name).is_some_and(|d| d.balance.is_zero()))
            .map(|r| r.month)
    }

    /// Balance of every debt after the final simulated month.
    pub fn remaining_balances(&self) -> Vec<(String, Decimal)> {
        match self.records.last() {
            Some(last) => last
                .debts
                .iter()
                .map(|d| (d.name.clone(), d.balance))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Sum of [`PayoffPlan::remaining_balances`], saturating at `Decimal::MAX`.
    pub fn remaining_total(&self) -> Decimal {
        self.remaining_balances()
            .iter()
            .fold(Decimal::ZERO, |total, (_, b)| total.saturating_add(*b))
    }

    /// Column names in the order [`MonthlyRecord::columns`] yields them.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![
            MONTH_COLUMN.to_string(),
            TOTAL_PAYMENT_COLUMN.to_string(),
            TOTAL_INTEREST_COLUMN.to_string(),
        ];
        for name in &self.order {
            headers.push(balance_column(name));
            headers.push(payment_column(name));
            headers.push(interest_column(name));
        }
        headers
    }

    /// One balance line per debt, labelled for charting.
    pub fn balance_series(&self) -> Vec<BalanceSeries> {
        self.order
            .iter()
            .map(|name| {
                let column = balance_column(name);
                BalanceSeries {
                    label: series_label(&column).to_string(),
                    points: self
                        .records
                        .iter()
                        .filter_map(|r| r.debt(name).map(|d| (r.month, d.balance)))
                        .collect(),
                }
            })
            .collect()
    }

    /// Debt names in the order they reach zero; debts still open are left out.
    pub fn payoff_order(&self) -> Vec<String> {
        let mut paid: Vec<(u32, usize, &String)> = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(i, name)| self.payoff_month(name).map(|m| (m, i, name)))
            .collect();
        paid.sort();
        paid.into_iter().map(|(_, _, name)| name.clone()).collect()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            strategy: self.strategy,
            months: self.months(),
            total_interest: self.total_interest(),
            total_paid: self.total_paid(),
            status: self.status,
            payoff_order: self.payoff_order(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BalanceSeries {
    pub label: String,
    pub points: Vec<(u32, Decimal)>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PlanSummary {
    pub strategy: Strategy,
    pub months: usize,
    pub total_interest: Decimal,
    pub total_paid: Decimal,
    pub status: PlanStatus,
    pub payoff_order: Vec<String>,
}

/// Snowball and avalanche run over the same portfolio.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct StrategyComparison {
    pub snowball: PlanSummary,
    pub avalanche: PlanSummary,
}

impl StrategyComparison {
    /// Interest avoided by choosing avalanche over snowball (negative if snowball is cheaper).
    pub fn interest_saved(&self) -> Decimal {
        self.snowball.total_interest - self.avalanche.total_interest
    }

    /// Months avoided by choosing avalanche over snowball.
    pub fn months_saved(&self) -> i64 {
        self.snowball.months as i64 - self.avalanche.months as i64
    }

    pub fn summaries(&self) -> [&PlanSummary; 2] {
        [&self.snowball, &self.avalanche]
    }
}
