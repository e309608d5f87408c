use clap::{Parser, ValueEnum};
use debtplan::application::engine::{PayoffEngine, PlanRequest};
use debtplan::domain::debt::Debt;
use debtplan::domain::ledger::StrategyComparison;
use debtplan::domain::ports::ReportSinkBox;
use debtplan::domain::strategy::Strategy;
use debtplan::infrastructure::file::FileReportSink;
use debtplan::infrastructure::stdout::{ReportFormat, StdoutReportSink};
use debtplan::interfaces::csv::debt_reader::DebtReader;
use debtplan::interfaces::csv::ledger_writer::{CellFormat, LedgerWriter};
use debtplan::interfaces::currency::format_currency;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFormat {
    Csv,
    Json,
}

impl From<CliFormat> for ReportFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Csv => ReportFormat::Csv,
            CliFormat::Json => ReportFormat::Json,
        }
    }
}

/// Debt payoff planner: snowball and avalanche schedules from a CSV of debts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debts CSV file (name,balance,interest_rate,min_payment), or `-` for stdin
    input: PathBuf,

    /// Payoff strategy: snowball (smallest balance first) or avalanche (highest rate first)
    #[arg(short, long, default_value = "snowball")]
    strategy: Strategy,

    /// Extra amount paid every month on top of the minimum payments
    #[arg(short, long, default_value = "0")]
    extra: Decimal,

    /// Write <OUTPUT>.csv and <OUTPUT>.json instead of printing the schedule
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format for the schedule printed to stdout
    #[arg(short, long, value_enum, default_value_t = CliFormat::Csv)]
    format: CliFormat,

    /// Write amounts as plain numbers instead of `$1,234.56`
    #[arg(long)]
    plain: bool,

    /// Compare both strategies instead of printing a schedule
    #[arg(long)]
    compare: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn read_debts(input: &Path) -> Result<Vec<Debt>> {
    if input == Path::new("-") {
        DebtReader::new(io::stdin().lock()).read_all().into_diagnostic()
    } else {
        let file = File::open(input).into_diagnostic()?;
        DebtReader::new(file).read_all().into_diagnostic()
    }
}

fn months(n: i64) -> String {
    if n.abs() == 1 {
        format!("{n} month")
    } else {
        format!("{n} months")
    }
}

/// One-line summary of which strategy is cheaper and by how much.
fn comparison_verdict(comparison: &StrategyComparison) -> String {
    let saved = comparison.interest_saved();
    let (winner, amount, months_gained) = if saved > Decimal::ZERO {
        ("Avalanche", saved, comparison.months_saved())
    } else if saved < Decimal::ZERO {
        ("Snowball", -saved, -comparison.months_saved())
    } else {
        return "Both strategies cost the same interest".to_string();
    };

    let amount = format_currency(amount);
    match months_gained {
        0 => format!("{winner} saves {amount} in interest in the same number of months"),
        n if n > 0 => format!("{winner} saves {amount} in interest and {}", months(n)),
        n => format!("{winner} saves {amount} in interest but takes {} longer", months(-n)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let debts = read_debts(&cli.input)?;
    let cells = if cli.plain {
        CellFormat::Plain
    } else {
        CellFormat::Currency
    };

    if cli.compare {
        let comparison = PayoffEngine::compare(&debts, cli.extra).into_diagnostic()?;
        let stdout = io::stdout();
        LedgerWriter::with_format(stdout.lock(), cells)
            .write_comparison(&comparison)
            .into_diagnostic()?;

        info!("{}", comparison_verdict(&comparison));
        return Ok(());
    }

    let sink: ReportSinkBox = match &cli.output {
        Some(base) => Box::new(FileReportSink::new(base, cells)),
        None => Box::new(StdoutReportSink::new(cli.format.into(), cells)),
    };
    let engine = PayoffEngine::new(sink);

    let plan = engine
        .run(PlanRequest {
            debts,
            strategy: cli.strategy,
            extra_payment: cli.extra,
        })
        .await
        .into_diagnostic()?;

    if plan.is_debt_free() {
        info!(
            "Debt free in {} months with {} total interest",
            plan.months(),
            format_currency(plan.total_interest())
        );
    } else {
        warn!(
            "Not paid off after {} months; {} still owed",
            plan.months(),
            format_currency(plan.remaining_total())
        );
    }

    Ok(())
}
