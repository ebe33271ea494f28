//! # Activation Functions Module
//!
//! Scalar activation helpers used by the network engine.
//!
//! - **ReLU**: `max(0, x)`, the only activation used by [`crate::network::Network`]
//! - **ReLU derivative**: taken on the post-activation output
//! - **Softmax**: turns a Q-value vector into a probability distribution
//! - **Argmax**: first-maximum index, the greedy action rule
//!
//! ## Usage Example
//!
//! ```rust
//! use qhive::activations::{argmax, relu, softmax};
//! use ndarray::array;
//!
//! assert_eq!(relu(-2.0), 0.0);
//! let q_values = array![0.5, 2.0, 2.0];
//! assert_eq!(argmax(q_values.view()), Some(1));
//! let probs = softmax(q_values.view());
//! assert!((probs.sum() - 1.0).abs() < 1e-12);
//! ```

pub mod functions;

pub use functions::{argmax, max_value, relu, relu_derivative, relu_inplace, softmax};
