//! Application layer: runs payoff simulations and hands the finished plans
//! to a report sink.
//!
//! The `PayoffEngine` is the entry point. Simulation is synchronous and pure;
//! only publishing to the sink is async.

pub mod engine;
