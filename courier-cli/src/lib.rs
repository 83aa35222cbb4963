//! A library behind the delivery fleet simulator command line interface:
//! csv data set import and report rendering.
//!

#![forbid(unsafe_code)]

pub mod import;
pub mod report;
