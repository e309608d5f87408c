use super::ledger::PayoffPlan;
use crate::error::Result;
use async_trait::async_trait;

/// Consumer of finished payoff plans: renders, stores or forwards them.
///
/// The engine only relies on the shape of [`PayoffPlan`]; formatting,
/// charting and file naming belong to the implementation.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn publish(&self, plan: &PayoffPlan) -> Result<()>;
}

pub type ReportSinkBox = Box<dyn ReportSink>;
