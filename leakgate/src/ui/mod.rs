// leakgate/src/ui/mod.rs
//! Console output for the leakgate CLI.

pub mod report_view;
