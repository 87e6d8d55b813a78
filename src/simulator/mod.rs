//! Headless Monte Carlo runs of the real engine.
//!
//! Each run builds a seeded field, drives the [`GameLoop`](crate::GameLoop)
//! with a scripted button policy on a display that discards everything, and
//! records how long it lasted and what it scored. Runs that outlast the
//! obstacle supply never halt and are reported as survivors.

mod config;
mod report;
mod runner;

pub use config::{InputPolicy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
