use crate::domain::ledger::PayoffPlan;
use crate::domain::ports::ReportSink;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory report sink.
///
/// Clones share the same underlying list, so a caller can keep a handle
/// after boxing one copy into a [`crate::application::engine::PayoffEngine`].
#[derive(Default, Clone)]
pub struct InMemoryReportSink {
    plans: Arc<RwLock<Vec<PayoffPlan>>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every plan published so far, oldest first.
    pub async fn plans(&self) -> Vec<PayoffPlan> {
        self.plans.read().await.clone()
    }
}

#[async_trait]
impl ReportSink for InMemoryReportSink {
    async fn publish(&self, plan: &PayoffPlan) -> Result<()> {
        let mut plans = self.plans.write().await;
        plans.push(plan.clone());
        Ok(())
    }
}
