//! Command Line Interface (CLI) layer for morphcheck.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolve the data path to a
//! list of files, then load and check each one in turn.
//!
//! If you are embedding morphcheck into another application, prefer using
//! the `morphcheck::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
