//! # Loss Functions Module
//!
//! Squared-error measures used to report training progress. The network's
//! backward pass hard-codes the squared-error gradient `output - expected`;
//! these helpers only measure.

pub mod functions;

pub use functions::{mean_squared_error, squared_error};
