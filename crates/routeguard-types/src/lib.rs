//! Stable DTOs and IDs used across the routeguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for diagnostics, emitted units, and the report envelope
//! - stable rule IDs and codes
//! - canonical repo-relative source path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod group;
pub mod ids;
pub mod path;
pub mod report;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use group::{GroupKey, is_valid_identifier};
pub use path::SrcPath;
pub use report::{
    Diagnostic, EmittedUnit, GenerateData, GenerateReport, Location, Severity, SeverityCounts,
    ToolMeta, UnitKind, SCHEMA_REPORT_V1,
};
