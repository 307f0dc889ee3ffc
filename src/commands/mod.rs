//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditReport, run_audit};
pub use check::{CheckResult, check_equation};
pub use simple::run_simple;
