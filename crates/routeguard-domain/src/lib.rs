//! Pure convention evaluation (no IO).
//!
//! Input: a symbol table of annotated declarations constructed elsewhere,
//! plus the read-only pass configuration.
//! Output: group registries of validated entries + diagnostics.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod fragment;
pub mod location;
pub mod model;
pub mod policy;
pub mod registry;
pub mod report;
pub mod route;
pub mod rules;
pub mod test_support;

mod engine;
#[cfg(test)]
mod proptests;

pub use engine::evaluate;
