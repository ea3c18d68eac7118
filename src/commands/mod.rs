//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditReport, print_audit_report, run_audit};
pub use check::{CheckResult, check_guess};
pub use simple::{LineGuessSource, run_simple};
