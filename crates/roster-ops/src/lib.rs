//! Back-office roster workflows for a law office.
//!
//! The central piece is the roster audit pipeline under [`workflows::roster`]:
//! a pure pass over collaborator, role, and team tables that selects
//! currently-active legal staff and reports staged counters plus hire-date
//! diagnostics. Everything else — configuration, telemetry, the store client,
//! and the HTTP router — exists to feed that pipeline and expose its output.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
