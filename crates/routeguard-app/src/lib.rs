//! Use case orchestration for routeguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and emit layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod generate;
mod render;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use generate::{
    GenerateInput, GenerateOutput, TOOL_NAME, generate_exit_code, run_generate,
    runtime_error_report,
};
pub use render::{render_text, serialize_report, write_report};
