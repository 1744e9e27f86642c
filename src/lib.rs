//! Bridge between a web-based case-intake form and the downstream
//! case-management system: a pure transformation/validation pipeline
//! exposed over HTTP and a small CLI.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
