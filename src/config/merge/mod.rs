//! Config composition: defaults and source ordering.

pub mod merge_policy;
pub mod service;
