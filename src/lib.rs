//! # qhive - Multi-Agent Deep Q-Learning Engine
//!
//! qhive trains small feedforward ReLU networks as Q-value approximators for
//! several agents that learn side by side. Agents share one bounded experience
//! replay buffer and stabilize their targets with a lagging copy of their own
//! network (a simplified Deep Q-Network).
//!
//! ## Key Features
//!
//! - **Neural Networks**: per-sample forward pass and hand-written backpropagation
//! - **DQN Agent**: epsilon-greedy policy, target network, per-sample SGD updates
//! - **Shared Replay**: a thread-safe FIFO buffer any number of agents can write to
//! - **Explicit Randomness**: every agent owns a seedable generator
//!
//! ## Quick Start
//!
//! ```rust
//! use qhive::agent::DqnAgent;
//! use qhive::config::AgentConfig;
//! use qhive::replay_buffer::ReplayBuffer;
//! use ndarray::array;
//! use std::sync::Arc;
//!
//! let buffer = Arc::new(ReplayBuffer::new(10_000));
//! let config = AgentConfig { batch_size: 1, seed: Some(7), ..AgentConfig::default() };
//! let mut agent = DqnAgent::new(&[4, 8, 2], config, Arc::clone(&buffer)).unwrap();
//!
//! let state = array![0.0, 0.5, 1.0, 0.5];
//! let action = agent.act(state.view()).unwrap();
//! agent.store_experience(state.clone(), action, 0.1, state, false).unwrap();
//! assert!(agent.train().unwrap().is_some());
//! agent.update_target_network();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - ReLU, its derivative, softmax and argmax
//! - [`agent`] - The DQN agent and its builder
//! - [`builders`] - Builder patterns for networks and replay buffers
//! - [`config`] - Serializable hyperparameter sets
//! - [`encoding`] - One-hot helpers for building state vectors
//! - [`environment`] - The interface a simulated world exposes to agents
//! - [`error`] - Error types and result handling
//! - [`layers`] - Neurons and fully connected layers
//! - [`loss`] - Squared-error measures
//! - [`network`] - Feedforward network, forward records and backpropagation
//! - [`parallel`] - Stepping many agents on rayon workers
//! - [`replay_buffer`] - Shared experience replay

#[macro_use]
pub mod macros;

pub mod activations;
pub mod agent;
pub mod builders;
pub mod config;
pub mod encoding;
pub mod environment;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod parallel;
pub mod replay_buffer;

#[cfg(test)]
mod tests;
