//! Parallel stepping of independent agents
//!
//! Each agent owns its networks and random source, so agents can be driven on
//! separate rayon workers. The only state they touch in common is the replay
//! buffer, which serializes writers internally.

use ndarray::parallel::prelude::*;
use ndarray::Array1;

use crate::agent::DqnAgent;
use crate::error::{QHiveError, Result};

/// Call [`DqnAgent::train`] on every agent in parallel.
///
/// Results are returned in agent order. The first error aborts the collection;
/// agents that already trained keep their update.
pub fn train_agents_parallel(agents: &mut [DqnAgent]) -> Result<Vec<Option<f64>>> {
    agents.par_iter_mut().map(|agent| agent.train()).collect()
}

/// Let agent `i` pick an action for `states[i]`, all in parallel.
pub fn act_parallel(agents: &mut [DqnAgent], states: &[Array1<f64>]) -> Result<Vec<usize>> {
    QHiveError::check_width("states per agent", agents.len(), states.len())?;
    agents
        .par_iter_mut()
        .zip(states.par_iter())
        .map(|(agent, state)| agent.act(state.view()))
        .collect()
}

/// Sync every agent's target network from its online network.
pub fn sync_target_networks(agents: &mut [DqnAgent]) {
    agents
        .par_iter_mut()
        .for_each(|agent| agent.update_target_network());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::replay_buffer::ReplayBuffer;
    use ndarray::array;
    use std::sync::Arc;

    fn agents(count: u64, buffer: &Arc<ReplayBuffer>) -> Vec<DqnAgent> {
        (0..count)
            .map(|seed| {
                let config = AgentConfig {
                    batch_size: 4,
                    seed: Some(seed),
                    ..AgentConfig::default()
                };
                DqnAgent::new(&[2, 4, 2], config, Arc::clone(buffer)).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_parallel_training_shares_buffer() {
        let buffer = Arc::new(ReplayBuffer::new(100));
        let mut agents = agents(4, &buffer);

        assert_eq!(train_agents_parallel(&mut agents).unwrap(), vec![None; 4]);

        for i in 0..8 {
            let x = i as f64 / 8.0;
            buffer.add(array![x, 1.0 - x], i % 2, 1.0, array![x, x], i == 7);
        }

        let losses = train_agents_parallel(&mut agents).unwrap();
        assert_eq!(losses.len(), 4);
        assert!(losses.iter().all(|loss| loss.is_some()));
        assert!(agents.iter().all(|agent| agent.train_steps() == 1));
    }

    #[test]
    fn test_act_parallel() {
        let buffer = Arc::new(ReplayBuffer::new(10));
        let mut agents = agents(3, &buffer);
        let states = vec![array![0.0, 1.0], array![1.0, 0.0], array![0.5, 0.5]];

        let actions = act_parallel(&mut agents, &states).unwrap();
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|&a| a < 2));

        assert!(act_parallel(&mut agents, &states[..2]).is_err());
    }

    #[test]
    fn test_sync_target_networks() {
        let buffer = Arc::new(ReplayBuffer::new(10));
        let mut agents = agents(2, &buffer);
        for agent in &mut agents {
            agent.q_network.layers[0].neurons_mut()[0].bias = 5.0;
        }
        sync_target_networks(&mut agents);
        for agent in &agents {
            assert_eq!(agent.q_network, agent.target_network);
        }
    }
}
