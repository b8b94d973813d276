// ============================================================================
// Test Import Generator - Library Interface
// ============================================================================
//
// This module exposes the internal modules for integration testing.
// The main binary (main.rs) drives them through `cli`.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod import_gen;
pub mod orchestrator;
pub mod path_mapper;
pub mod report;
pub mod rewriter;

pub use config::Config;
pub use error::ImportError;
pub use orchestrator::run;
pub use report::{FileOutcome, FileStatus, RunReport};
