use crate::domain::debt::Debt;
use crate::error::{PayoffError, Result};
use std::io::Read;

/// Reads a debt portfolio from a CSV source.
///
/// Expects a `name,balance,interest_rate,min_payment` header. Fields are
/// trimmed, so `Visa, 1500, 22.9, 60` reads the same as the compact form.
pub struct DebtReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DebtReader<R> {
    /// Creates a new `DebtReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes debts.
    pub fn debts(self) -> impl Iterator<Item = Result<Debt>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoffError::from))
    }

    /// Reads every debt, stopping at the first malformed row.
    pub fn read_all(self) -> Result<Vec<Debt>> {
        self.debts().collect()
    }
}
