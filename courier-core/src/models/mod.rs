//! A collection of models to represent the delivery problem and its simulation state.

pub mod common;
pub mod problem;
