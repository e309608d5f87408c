use crate::domain::ledger::{BalanceSeries, MonthlyRecord, PayoffPlan, PlanSummary};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// JSON view of a payoff plan: its summary, the per-debt balance series a
/// chart renderer needs and, optionally, the full monthly schedule.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub summary: PlanSummary,
    pub remaining_balances: Vec<(String, rust_decimal::Decimal)>,
    pub series: Vec<BalanceSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<&'a [MonthlyRecord]>,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a PayoffPlan) -> Self {
        Self {
            summary: plan.summary(),
            remaining_balances: plan.remaining_balances(),
            series: plan.balance_series(),
            schedule: Some(&plan.records),
        }
    }

    pub fn without_schedule(mut self) -> Self {
        self.schedule = None;
        self
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
