//! Integration tests for the solution explorer tree

mod grouping_properties;
mod snapshot_cli;
mod support;
mod tree_scenarios;
