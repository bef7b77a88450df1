//! Library half of the stock picker: CSV price store, profit-window
//! analysis, and report formatting. The interactive shell lives in the bin.

pub mod analysis;
pub mod config;
pub mod data;
pub mod report;
