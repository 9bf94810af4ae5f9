// Library root
// -----------
// This crate seeds a users/groups API with synthetic data for manual
// testing. The binary (`main.rs`) wires configuration, logging and the
// HTTP client together and hands them to the scenario driver.
//
// Module responsibilities:
// - `ident`: random identifier suggestions (`user…` / `group…`).
// - `transport`: one JSON request/response round trip over HTTP, behind
//   the `JsonTransport` trait.
// - `models`: request payloads and response records.
// - `api`: the four domain operations against `/users` and `/groups`.
// - `scenario`: the fixed seeding run.
// - `config`, `error`, `logging`: ambient plumbing.
//
// Keeping the transport behind a trait lets the domain operations and the
// scenario run against an in-memory API in tests.
pub mod api;
pub mod config;
pub mod error;
pub mod ident;
pub mod logging;
pub mod models;
pub mod scenario;
pub mod transport;

pub use error::{Result, SeedError};
