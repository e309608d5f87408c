pub mod debt_reader;
pub mod ledger_writer;
