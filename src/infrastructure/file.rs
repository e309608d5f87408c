use crate::domain::ledger::PayoffPlan;
use crate::domain::ports::ReportSink;
use crate::error::Result;
use crate::interfaces::csv::ledger_writer::{CellFormat, LedgerWriter};
use crate::interfaces::json::PlanReport;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes each published plan next to a base path.
///
/// `<base>.csv` holds the formatted monthly schedule and `<base>.json` the
/// plan summary with per-debt balance series for charting. Publishing twice
/// overwrites both files.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    base: PathBuf,
    cells: CellFormat,
}

impl FileReportSink {
    pub fn new<P: AsRef<Path>>(base: P, cells: CellFormat) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
            cells,
        }
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.with_suffix(".csv")
    }

    pub fn summary_path(&self) -> PathBuf {
        self.with_suffix(".json")
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut path = OsString::from(self.base.as_os_str());
        path.push(suffix);
        PathBuf::from(path)
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn publish(&self, plan: &PayoffPlan) -> Result<()> {
        if let Some(parent) = self.base.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut writer = LedgerWriter::with_format(Vec::new(), self.cells);
        writer.write_plan(plan)?;
        let schedule = writer.into_inner()?;

        let mut summary = Vec::new();
        PlanReport::new(plan).without_schedule().write(&mut summary)?;

        let schedule_path = self.schedule_path();
        let summary_path = self.summary_path();
        tokio::fs::write(&schedule_path, schedule).await?;
        tokio::fs::write(&summary_path, summary).await?;

        info!(
            schedule = %schedule_path.display(),
            summary = %summary_path.display(),
            "Payoff schedule saved"
        );
        Ok(())
    }
}
