//! ID prefix constants.
//!
//! Every row ID is `{prefix}-{8 hex chars}`, generated in SQL at insert time.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_RUN: &str = "run";
pub const PREFIX_STEP: &str = "stp";
pub const PREFIX_SOURCE: &str = "src";

/// All prefixes, for exhaustive tests and tooling.
pub const ALL_PREFIXES: [&str; 4] = [PREFIX_PROJECT, PREFIX_RUN, PREFIX_STEP, PREFIX_SOURCE];
