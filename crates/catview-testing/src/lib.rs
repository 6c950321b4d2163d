//! Testing infrastructure for catview integration tests.
//!
//! - `TestWorld`: isolated temp directory holding catalog, metadata and
//!   config fixtures, plus a runner for the `catview` binary
//! - `assertions`: checks over the JSON output
//! - `fixtures`: sample catalog and metadata bodies

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
