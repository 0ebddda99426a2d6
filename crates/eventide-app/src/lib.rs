//! Command-line front end for eventide: loads a snapshot and reports on
//! every root event.

pub mod cli;
pub mod error;
pub mod report;
