use crate::domain::ledger::{PayoffPlan, PlanStatus, StrategyComparison};
use crate::error::{PayoffError, Result};
use crate::interfaces::currency::{format_currency, format_plain, is_currency_column};
use rust_decimal::Decimal;
use std::io::Write;

/// How money cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    /// `$1,234.57`
    #[default]
    Currency,
    /// `1234.57`
    Plain,
}

/// Writes payoff schedules and strategy comparisons as CSV.
///
/// Every column whose name mentions a payment, balance or interest is
/// rendered as money; the `Month` column is written as-is.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
    format: CellFormat,
}

impl<W: Write> LedgerWriter<W> {
    pub fn with_format(sink: W, format: CellFormat) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            format,
        }
    }

    fn cell(&self, column: &str, value: Decimal) -> String {
        if !is_currency_column(column) {
            return value.normalize().to_string();
        }
        match self.format {
            CellFormat::Currency => format_currency(value),
            CellFormat::Plain => format_plain(value),
        }
    }

    /// Writes the header row followed by one row per month.
    pub fn write_plan(&mut self, plan: &PayoffPlan) -> Result<()> {
        self.writer.write_record(plan.headers())?;
        for record in &plan.records {
            let row: Vec<String> = record
                .columns()
                .iter()
                .map(|(column, value)| self.cell(column, *value))
                .collect();
            self.writer.write_record(&row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes one row per strategy.
    pub fn write_comparison(&mut self, comparison: &StrategyComparison) -> Result<()> {
        self.writer.write_record([
            "Strategy",
            "Months",
            "Total Interest Paid",
            "Total Payment",
            "Status",
            "Payoff Order",
        ])?;
        for summary in comparison.summaries() {
            let status = match summary.status {
                PlanStatus::Done => "paid off",
                PlanStatus::CeilingReached => "ceiling reached",
            };
            self.writer.write_record([
                summary.strategy.to_string(),
                summary.months.to_string(),
                self.cell("Total Interest Paid", summary.total_interest),
                self.cell("Total Payment", summary.total_paid),
                status.to_string(),
                summary.payoff_order.join(" > "),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PayoffError::IoError(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::PayoffEngine;
    use crate::domain::debt::Debt;
    use crate::domain::strategy::Strategy;
    use rust_decimal_macros::dec;

    fn plan() -> PayoffPlan {
        let debts = vec![
            Debt::new("Phone", dec!(1500), dec!(0), dec!(1000)),
            Debt::new("Card", dec!(900), dec!(12), dec!(100)),
        ];
        PayoffEngine::plan(&debts, Strategy::Snowball, dec!(0)).unwrap()
    }

    fn render(format: CellFormat) -> String {
        let mut writer = LedgerWriter::with_format(Vec::new(), format);
        writer.write_plan(&plan()).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_plan_currency_format() {
        let output = render(CellFormat::Currency);
        let mut lines = output.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Month,Total Payment,Total Interest Paid,\
             Debt Card Balance,Debt Card Payment,Debt Card Interest,\
             Debt Phone Balance,Debt Phone Payment,Debt Phone Interest"
        );
        // Card: 900 at 1%/month -> 9.00 interest, 91.00 principal.
        assert_eq!(
            lines.next().unwrap(),
            "1,\"$1,100.00\",$9.00,$809.00,$100.00,$9.00,$500.00,\"$1,000.00\",$0.00"
        );
    }

    #[test]
    fn test_write_plan_plain_format() {
        let output = render(CellFormat::Plain);
        let second = output.lines().nth(1).unwrap();

        assert_eq!(second, "1,1100.00,9.00,809.00,100.00,9.00,500.00,1000.00,0.00");
        assert_eq!(output.lines().count(), plan().months() + 1);
    }

    #[test]
    fn test_write_comparison() {
        let debts = vec![Debt::new("Card", dec!(900), dec!(12), dec!(100))];
        let comparison = PayoffEngine::compare(&debts, dec!(0)).unwrap();

        let mut writer = LedgerWriter::with_format(Vec::new(), CellFormat::Plain);
        writer.write_comparison(&comparison).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Strategy,Months,"));
        assert!(lines[1].starts_with("snowball,10,"));
        assert!(lines[2].starts_with("avalanche,10,"));
        assert!(lines[1].ends_with(",paid off,Card"));
    }
}
