//! Domain layer: debts, payoff strategies, portfolio validation and the
//! monthly ledger, plus the port through which finished plans leave the core.

pub mod debt;
pub mod ledger;
pub mod portfolio;
pub mod ports;
pub mod strategy;
