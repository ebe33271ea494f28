//! # Reinforcement Learning Agents Module
//!
//! This module provides the DQN agent: an epsilon-greedy policy over a small
//! ReLU network, trained from a replay buffer that several agents may share.
//!
//! ## Core Concepts
//!
//! - **Online network**: picks actions and receives every SGD step
//! - **Target network**: a frozen value copy that supplies TD targets
//! - **Exploration vs Exploitation**: random action with probability epsilon
//! - **Experience Replay**: each `train()` call replays a random minibatch
//!
//! ## Example Usage
//!
//! ```rust
//! use qhive::agent::DqnAgentBuilder;
//! use qhive::replay_buffer::ReplayBuffer;
//! use ndarray::array;
//! use std::sync::Arc;
//!
//! let shared = Arc::new(ReplayBuffer::new(10_000));
//! let mut agents: Vec<_> = (0..3)
//!     .map(|i| {
//!         DqnAgentBuilder::new()
//!             .layer_sizes(&[6, 24, 24, 2])
//!             .learning_rate(0.01)
//!             .seed(i)
//!             .replay_buffer(Arc::clone(&shared))
//!             .build()
//!             .unwrap()
//!     })
//!     .collect();
//!
//! let state = array![0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
//! for agent in &mut agents {
//!     let action = agent.act(state.view()).unwrap();
//!     assert!(action < 2);
//! }
//! ```

mod dqn;
pub use dqn::{DqnAgent, DqnAgentBuilder};
