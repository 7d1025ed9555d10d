//! Internal sales-performance administration service.
//!
//! Aggregates salesman, customer, and sales-order data into yearly bonus
//! evaluations that pass through a three-party approval workflow (HR, CEO,
//! salesman). The evaluation workflow itself lives under
//! [`workflows::evaluation`]; the binary in `main.rs` fronts it with an HTTP
//! API and a demo CLI.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
