// leakgate/src/lib.rs
//! # Leakgate CLI Application
//!
//! This crate provides the command-line interface for the Leakgate secret
//! scanner: argument parsing, git index plumbing, report rendering, and the
//! pre-commit hook installer. All detection logic lives in `leakgate-core`.

pub mod cli;
pub mod commands;
pub mod git;
pub mod logger;
pub mod ui;
