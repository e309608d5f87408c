use crate::domain::ledger::PayoffPlan;
use crate::domain::ports::ReportSink;
use crate::error::Result;
use crate::interfaces::csv::ledger_writer::{CellFormat, LedgerWriter};
use crate::interfaces::json::PlanReport;
use async_trait::async_trait;
use std::io::{self, Write};

/// Output encoding for a published plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Prints each published plan to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReportSink {
    format: ReportFormat,
    cells: CellFormat,
}

impl StdoutReportSink {
    pub fn new(format: ReportFormat, cells: CellFormat) -> Self {
        Self { format, cells }
    }

    /// Renders `plan` into `out` the same way [`ReportSink::publish`] does.
    pub fn render<W: Write>(&self, plan: &PayoffPlan, mut out: W) -> Result<()> {
        match self.format {
            ReportFormat::Csv => LedgerWriter::with_format(&mut out, self.cells).write_plan(plan)?,
            ReportFormat::Json => {
                PlanReport::new(plan).write(&mut out)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ReportSink for StdoutReportSink {
    async fn publish(&self, plan: &PayoffPlan) -> Result<()> {
        let stdout = io::stdout();
        self.render(plan, stdout.lock())
    }
}
