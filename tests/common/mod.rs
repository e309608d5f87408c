#![allow(dead_code)]

use debtplan::domain::debt::{Debt, monthly_interest};
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 4] = ["name", "balance", "interest_rate", "min_payment"];

/// Writes `rows` debts that each clear their first month's interest.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            format!("Debt {i}").as_str(),
            &(i * 250).to_string(),
            "12.5",
            &(i * 10 + 25).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// A random portfolio whose minimum payments always cover the first
/// month's interest, so it validates with or without an extra payment.
pub fn random_portfolio<R: Rng>(rng: &mut R, max_debts: usize) -> Vec<Debt> {
    let count = rng.gen_range(1..=max_debts);
    (0..count)
        .map(|i| {
            let balance = Decimal::new(rng.gen_range(10_000..2_000_000), 2);
            let rate = Decimal::new(rng.gen_range(0..3_000), 2);
            let interest = monthly_interest(balance, rate).unwrap();
            let cushion = Decimal::new(rng.gen_range(100..50_000), 2);
            let min_payment = (interest + cushion).round_dp(2);
            Debt::new(format!("D{i}"), balance, rate, min_payment)
        })
        .collect()
}

/// A random portfolio whose minimum payments never exceed the first
/// month's interest. It only validates with an extra payment, and balances
/// the pool does not reach grow every month.
pub fn random_waiver_portfolio<R: Rng>(rng: &mut R, max_debts: usize) -> Vec<Debt> {
    let count = rng.gen_range(1..=max_debts);
    (0..count)
        .map(|i| {
            let balance = Decimal::new(rng.gen_range(10_000..2_000_000), 2);
            let rate = Decimal::new(rng.gen_range(1_000..120_000), 2);
            let interest = monthly_interest(balance, rate).unwrap();
            let share = Decimal::new(rng.gen_range(10..=100), 2);
            let min_payment = (interest * share)
                .round_dp(2)
                .clamp(Decimal::new(1, 2), interest);
            Debt::new(format!("W{i}"), balance, rate, min_payment)
        })
        .collect()
}

pub fn random_extra<R: Rng>(rng: &mut R) -> Decimal {
    if rng.gen_bool(0.25) {
        Decimal::ZERO
    } else {
        Decimal::new(rng.gen_range(0..50_000), 2)
    }
}
