//! Core types and helpers for tallyfile.
//!
//! This crate provides the pieces shared by the content analyzer and the
//! directory scanner: configuration builders, error types, the scan summary
//! and exact decimal rounding.

pub mod decimal;

mod config;
mod error;
mod summary;

pub use config::{AnalyzeConfig, AnalyzeConfigBuilder, ScanConfig, ScanConfigBuilder};
pub use error::{AnalyzeError, ScanError, ScanWarning, WarningKind};
pub use summary::ScanSummary;
