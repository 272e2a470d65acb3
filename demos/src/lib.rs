//! Command-line front end for the graphpath crates: graph file loading,
//! random graph generation and algorithm comparison reports.

pub mod cli;
pub mod generate;
pub mod logging;
