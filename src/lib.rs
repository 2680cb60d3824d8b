//! speclens — command metrics and scaffold extraction for Cypress spec files
//!
//! Two pipelines share a file walker and a tree-sitter parser:
//!
//! - `analyze` classifies every `receiver.member(...)` call in each spec
//!   file against a closed command taxonomy and aggregates per-test counts.
//! - `strip` empties non-empty test bodies while leaving suites, hooks,
//!   and description strings byte-for-byte intact.

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod metrics;
pub mod transform;

pub use crate::core::{Error, Result};
