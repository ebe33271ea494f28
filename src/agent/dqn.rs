use crate::activations::{argmax, max_value};
use crate::config::AgentConfig;
use crate::environment::Environment;
use crate::error::{QHiveError, Result};
use crate::network::Network;
use crate::replay_buffer::{Experience, ReplayBuffer};
use log::debug;
use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Deep Q-Network agent with a target network and a shared replay buffer
///
/// The agent owns two networks of identical shape:
/// - `q_network`, the online network that picks actions and is trained
/// - `target_network`, a frozen value copy used to compute TD targets
///
/// The replay buffer is held through an [`Arc`] and may be shared by many
/// agents. The agent never syncs its target network on its own; the driver
/// calls [`DqnAgent::update_target_network`] on whatever schedule it likes.
///
/// # Example
///
/// ```rust
/// use qhive::agent::DqnAgent;
/// use qhive::config::AgentConfig;
/// use qhive::replay_buffer::ReplayBuffer;
/// use ndarray::array;
/// use std::sync::Arc;
///
/// let buffer = Arc::new(ReplayBuffer::new(10_000));
/// let config = AgentConfig { batch_size: 2, seed: Some(1), ..AgentConfig::default() };
/// let mut agent = DqnAgent::new(&[4, 24, 24, 2], config, Arc::clone(&buffer)).unwrap();
///
/// let state = array![0.1, -0.2, 0.3, -0.1];
/// let action = agent.act(state.view()).unwrap();
///
/// // After the environment step...
/// let next_state = array![0.15, -0.25, 0.35, -0.05];
/// agent.store_experience(state.clone(), action, 1.0, next_state, false).unwrap();
///
/// // Not enough data yet: training is a no-op
/// assert_eq!(agent.train().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct DqnAgent {
    /// Online network for action selection and training
    pub q_network: Network,

    /// Frozen copy for stable TD targets
    pub target_network: Network,

    config: AgentConfig,

    /// Current exploration rate
    epsilon: f64,

    replay_buffer: Arc<ReplayBuffer>,

    /// Number of `train()` calls that actually trained
    train_steps: usize,

    rng: StdRng,
}

impl DqnAgent {
    /// Create an agent whose networks have the width sequence `layer_sizes`
    /// (state width first, action count last).
    pub fn new(layer_sizes: &[usize], config: AgentConfig, replay_buffer: Arc<ReplayBuffer>) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let q_network = Network::new(layer_sizes, &mut rng)?;
        let target_network = q_network.clone();

        Ok(DqnAgent {
            q_network,
            target_network,
            epsilon: config.epsilon,
            config,
            replay_buffer,
            train_steps: 0,
            rng,
        })
    }

    /// Create an agent sized for `env`: `[state_space, hidden_layers.., action_space]`.
    pub fn for_environment<E: Environment + ?Sized>(
        env: &E,
        config: AgentConfig,
        replay_buffer: Arc<ReplayBuffer>,
    ) -> Result<Self> {
        let mut layer_sizes = Vec::with_capacity(config.hidden_layers.len() + 2);
        layer_sizes.push(env.state_space());
        layer_sizes.extend_from_slice(&config.hidden_layers);
        layer_sizes.push(env.action_space());
        Self::new(&layer_sizes, config, replay_buffer)
    }

    /// Check that this agent's input and output widths fit `env`.
    pub fn check_environment<E: Environment + ?Sized>(&self, env: &E) -> Result<()> {
        QHiveError::check_width("environment state space", self.state_size(), env.state_space())?;
        QHiveError::check_width("environment action space", self.action_count(), env.action_space())
    }

    pub fn state_size(&self) -> usize {
        self.q_network.input_size()
    }

    pub fn action_count(&self) -> usize {
        self.q_network.output_size()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Override the exploration rate, e.g. 0.0 for an evaluation run.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.clamp(0.0, 1.0);
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn replay_buffer(&self) -> &Arc<ReplayBuffer> {
        &self.replay_buffer
    }

    pub fn train_steps(&self) -> usize {
        self.train_steps
    }

    pub fn q_network(&self) -> &Network {
        &self.q_network
    }

    pub fn target_network(&self) -> &Network {
        &self.target_network
    }

    /// Online-network Q-value estimates for `state`.
    pub fn q_values(&self, state: ArrayView1<f64>) -> Result<Array1<f64>> {
        self.q_network.forward(state)
    }

    /// Select an action using the epsilon-greedy policy
    pub fn act(&mut self, state: ArrayView1<f64>) -> Result<usize> {
        QHiveError::check_width("agent state", self.state_size(), state.len())?;

        if self.rng.gen::<f64>() < self.epsilon {
            // Exploration: random action
            Ok(self.rng.gen_range(0..self.action_count()))
        } else {
            self.act_greedy(state)
        }
    }

    /// Index of the highest Q-value, lowest index on ties. Never explores.
    pub fn act_greedy(&self, state: ArrayView1<f64>) -> Result<usize> {
        let q_values = self.q_network.forward(state)?;
        argmax(q_values.view())
            .ok_or_else(|| QHiveError::dimension_mismatch("q-values", self.action_count(), 0))
    }

    /// Push a transition into the shared replay buffer unchanged.
    ///
    /// Widths and the action index are checked here so a malformed transition
    /// fails for the agent that produced it instead of for whichever agent
    /// samples it later.
    pub fn store_experience(
        &self,
        state: Array1<f64>,
        action: usize,
        reward: f64,
        next_state: Array1<f64>,
        done: bool,
    ) -> Result<()> {
        QHiveError::check_width("experience state", self.state_size(), state.len())?;
        QHiveError::check_width("experience next state", self.state_size(), next_state.len())?;
        if action >= self.action_count() {
            return Err(QHiveError::InvalidAction {
                action,
                max_actions: self.action_count(),
            });
        }
        self.replay_buffer
            .add_experience(Experience::new(state, action, reward, next_state, done));
        Ok(())
    }

    /// Run one DQN training step.
    ///
    /// Returns `Ok(None)` without touching anything while the buffer holds fewer
    /// than `batch_size` experiences. Otherwise samples a minibatch, applies one
    /// independent SGD step per sampled experience, decays epsilon once, and
    /// returns the mean squared TD error measured before each step.
    pub fn train(&mut self) -> Result<Option<f64>> {
        let batch_size = self.config.batch_size;
        if self.replay_buffer.len() < batch_size {
            return Ok(None);
        }

        let minibatch = self.replay_buffer.sample(batch_size, &mut self.rng)?;

        let mut total_error = 0.0;
        for experience in &minibatch {
            total_error += self.learn_from(experience)?;
        }

        self.decay_epsilon();
        self.train_steps += 1;

        let loss = total_error / minibatch.len() as f64;
        debug!(
            "train step {}: mean squared TD error {:.6}, epsilon {:.4}",
            self.train_steps, loss, self.epsilon
        );
        Ok(Some(loss))
    }

    /// Replace the target network with a fresh value copy of the online network.
    pub fn update_target_network(&mut self) {
        self.target_network = self.q_network.clone();
        debug!("target network synced after {} train steps", self.train_steps);
    }

    /// Bootstrapped TD target for `experience`, evaluated on the target network.
    pub fn td_target(&self, experience: &Experience) -> Result<f64> {
        if experience.done {
            return Ok(experience.reward);
        }
        let next_q_values = self.target_network.forward(experience.next_state.view())?;
        let max_next_q = max_value(next_q_values.view())
            .ok_or_else(|| QHiveError::dimension_mismatch("target q-values", self.action_count(), 0))?;
        Ok(experience.reward + self.config.gamma * max_next_q)
    }

    // Only the acted-upon slot gets a new target; every other slot keeps the
    // network's own prediction and contributes zero error.
    fn learn_from(&mut self, experience: &Experience) -> Result<f64> {
        let target = self.td_target(experience)?;

        let record = self.q_network.forward_record(experience.state.view())?;
        let mut expected_q_values = record.output().clone();
        if experience.action >= expected_q_values.len() {
            return Err(QHiveError::InvalidAction {
                action: experience.action,
                max_actions: expected_q_values.len(),
            });
        }
        let td_error = expected_q_values[experience.action] - target;
        expected_q_values[experience.action] = target;

        self.q_network
            .backpropagate(&record, expected_q_values.view(), self.config.learning_rate)?;
        Ok(td_error * td_error)
    }

    fn decay_epsilon(&mut self) {
        let decayed = if self.config.linear_epsilon_decay {
            self.epsilon - self.config.epsilon_decay
        } else {
            self.epsilon * self.config.epsilon_decay
        };
        self.epsilon = decayed.max(self.config.epsilon_min);
    }
}

/// Builder pattern for DqnAgent
pub struct DqnAgentBuilder {
    layer_sizes: Vec<usize>,
    config: AgentConfig,
    replay_buffer: Option<Arc<ReplayBuffer>>,
}

impl DqnAgentBuilder {
    pub fn new() -> Self {
        DqnAgentBuilder {
            layer_sizes: vec![],
            config: AgentConfig::default(),
            replay_buffer: None,
        }
    }

    pub fn layer_sizes(mut self, sizes: &[usize]) -> Self {
        self.layer_sizes = sizes.to_vec();
        self
    }

    /// Replace every hyperparameter at once.
    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    pub fn epsilon_decay(mut self, decay: f64) -> Self {
        self.config.epsilon_decay = decay;
        self
    }

    pub fn epsilon_min(mut self, epsilon_min: f64) -> Self {
        self.config.epsilon_min = epsilon_min;
        self
    }

    pub fn linear_epsilon_decay(mut self, linear: bool) -> Self {
        self.config.linear_epsilon_decay = linear;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn replay_buffer(mut self, buffer: Arc<ReplayBuffer>) -> Self {
        self.replay_buffer = Some(buffer);
        self
    }

    pub fn build(self) -> Result<DqnAgent> {
        if self.layer_sizes.len() < 2 {
            return Err(QHiveError::InvalidParameter {
                name: "layer_sizes".to_string(),
                reason: "Must have at least 2 layers".to_string(),
            });
        }

        let replay_buffer = self.replay_buffer.ok_or_else(|| QHiveError::InvalidParameter {
            name: "replay_buffer".to_string(),
            reason: "Replay buffer must be specified".to_string(),
        })?;

        DqnAgent::new(&self.layer_sizes, self.config, replay_buffer)
    }
}

impl Default for DqnAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
