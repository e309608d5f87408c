use crate::domain::debt::{Debt, WorkingDebt};
use crate::domain::ledger::{DebtMonth, MonthlyRecord, PayoffPlan, PlanStatus, StrategyComparison};
use crate::domain::portfolio::Portfolio;
use crate::domain::ports::ReportSinkBox;
use crate::domain::strategy::Strategy;
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::{debug, info, trace, warn};

/// Simulation ceiling: 100 years of months.
pub const MAX_PAYOFF_MONTHS: u32 = 1200;

/// Inputs for a single payoff run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub debts: Vec<Debt>,
    pub strategy: Strategy,
    pub extra_payment: Decimal,
}

/// Runs debt payoff simulations and hands finished plans to a report sink.
///
/// The simulation itself is a pure function of the validated portfolio;
/// the engine owns nothing that outlives a run apart from the sink.
pub struct PayoffEngine {
    sink: ReportSinkBox,
}

impl PayoffEngine {
    /// Creates a new `PayoffEngine` publishing to `sink`.
    pub fn new(sink: ReportSinkBox) -> Self {
        Self { sink }
    }

    /// Validates `debts`, simulates the plan and publishes it.
    ///
    /// Validation failures are returned before anything reaches the sink.
    pub async fn run(&self, request: PlanRequest) -> Result<PayoffPlan> {
        let plan = Self::plan(&request.debts, request.strategy, request.extra_payment)?;
        self.sink.publish(&plan).await?;
        Ok(plan)
    }

    /// Validates and simulates without publishing.
    pub fn plan(debts: &[Debt], strategy: Strategy, extra_payment: Decimal) -> Result<PayoffPlan> {
        let portfolio = Portfolio::validate(debts, strategy, extra_payment)?;
        Ok(Self::simulate(&portfolio))
    }

    /// Runs both strategies over the same debts.
    pub fn compare(debts: &[Debt], extra_payment: Decimal) -> Result<StrategyComparison> {
        let snowball = Self::plan(debts, Strategy::Snowball, extra_payment)?;
        let avalanche = Self::plan(debts, Strategy::Avalanche, extra_payment)?;
        Ok(StrategyComparison {
            snowball: snowball.summary(),
            avalanche: avalanche.summary(),
        })
    }

    /// Simulates month by month until every balance is zero or the
    /// [`MAX_PAYOFF_MONTHS`] ceiling is reached.
    ///
    /// A balance that keeps growing can outrun `Decimal`'s range before the
    /// ceiling. The run then stops after the last month that fit and is
    /// reported as [`PlanStatus::CeilingReached`].
    pub fn simulate(portfolio: &Portfolio) -> PayoffPlan {
        let extra_payment = portfolio.extra_payment();
        info!(
            strategy = %portfolio.strategy(),
            debts = portfolio.debts().len(),
            total_balance = %portfolio.total_balance(),
            %extra_payment,
            "Simulating payoff plan"
        );

        let mut debts: Vec<WorkingDebt> = portfolio.debts().to_vec();
        let mut records = Vec::new();
        let mut total_interest_paid = Decimal::ZERO;
        let mut month = 1;

        while debts.iter().any(|d| !d.is_paid_off()) && month <= MAX_PAYOFF_MONTHS {
            let Some((next, lines, leftover)) = settle_month(&debts, extra_payment) else {
                warn!(month, "Amounts outgrew the decimal range; stopping early");
                break;
            };
            let Some((total_payment, cumulative_interest)) =
                month_totals(&lines, total_interest_paid)
            else {
                warn!(month, "Totals outgrew the decimal range; stopping early");
                break;
            };

            for (before, after) in debts.iter().zip(&next) {
                if !before.is_paid_off() && after.is_paid_off() {
                    debug!(debt = %after.name, month, "Debt paid off");
                }
            }

            total_interest_paid = cumulative_interest;
            trace!(month, %total_payment, %leftover, "Month settled");

            records.push(MonthlyRecord {
                month,
                debts: lines,
                total_payment,
                total_interest_paid,
            });
            debts = next;
            month += 1;
        }

        let status = if debts.iter().all(WorkingDebt::is_paid_off) {
            info!(
                months = records.len(),
                %total_interest_paid,
                "All debts paid off"
            );
            PlanStatus::Done
        } else {
            let remaining = debts
                .iter()
                .fold(Decimal::ZERO, |total, d| total.saturating_add(d.balance));
            warn!(
                months = records.len(),
                %remaining,
                "Simulation stopped before all debts were paid off"
            );
            PlanStatus::CeilingReached
        };

        PayoffPlan {
            strategy: portfolio.strategy(),
            extra_payment,
            order: portfolio.names(),
            records,
            status,
        }
    }
}

/// One month's pass over the debts in priority order, threading the
/// remaining extra-payment pool from each debt to the next.
fn settle_month(
    debts: &[WorkingDebt],
    extra_payment: Decimal,
) -> Option<(Vec<WorkingDebt>, Vec<DebtMonth>, Decimal)> {
    debts.iter().try_fold(
        (
            Vec::with_capacity(debts.len()),
            Vec::with_capacity(debts.len()),
            extra_payment,
        ),
        |(mut next, mut lines, pool), debt| {
            let settlement = debt.settle(pool)?;
            next.push(settlement.debt);
            lines.push(settlement.line);
            Some((next, lines, settlement.pool))
        },
    )
}

/// The month's total payment and the cumulative interest after it.
fn month_totals(lines: &[DebtMonth], interest_so_far: Decimal) -> Option<(Decimal, Decimal)> {
    let payment = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, l| total.checked_add(l.payment))?;
    let interest = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, l| total.checked_add(l.interest))?;
    Some((payment, interest_so_far.checked_add(interest)?))
}
