use ndarray::Array1;

use crate::error::Result;

/// Result of stepping one agent in an [`Environment`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub next_state: Array1<f64>,
    pub reward: f64,
    pub done: bool,
}

impl Transition {
    pub fn new(next_state: Array1<f64>, reward: f64, done: bool) -> Self {
        Transition {
            next_state,
            reward,
            done,
        }
    }
}

/// A simulated world shared by several agents, each addressed by index.
///
/// Rewards and terminal flags are opaque to the learning engine. An agent
/// driving this environment needs an input width of [`Environment::state_space`]
/// and an output width of [`Environment::action_space`].
pub trait Environment {
    /// Reset the episode and return an initial state.
    fn reset(&mut self) -> Array1<f64>;

    /// Apply `action` for the agent at `agent_index`.
    fn step(&mut self, agent_index: usize, action: usize) -> Result<Transition>;

    /// Number of discrete actions.
    fn action_space(&self) -> usize;

    /// Width of a state vector.
    fn state_space(&self) -> usize;

    /// Current state as seen by the agent at `agent_index`.
    fn state(&self, agent_index: usize) -> Array1<f64>;
}
