use std::sync::Arc;

use crate::config::ReplayBufferConfig;
use crate::error::{QHiveError, Result};
use crate::replay_buffer::ReplayBuffer;

/// Builder for ReplayBuffer
pub struct ReplayBufferBuilder {
    capacity: Option<usize>,
}

impl ReplayBufferBuilder {
    /// Create a new replay buffer builder
    pub fn new() -> Self {
        ReplayBufferBuilder { capacity: None }
    }

    /// Start from a loaded config
    pub fn from_config(config: &ReplayBufferConfig) -> Self {
        ReplayBufferBuilder {
            capacity: Some(config.max_size),
        }
    }

    /// Set the capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the replay buffer
    pub fn build(self) -> Result<ReplayBuffer> {
        let capacity = self.capacity.ok_or_else(|| QHiveError::InvalidParameter {
            name: "max_size".to_string(),
            reason: "replay buffer max_size not specified".to_string(),
        })?;

        if capacity == 0 {
            return Err(QHiveError::InvalidParameter {
                name: "max_size".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(ReplayBuffer::new(capacity))
    }

    /// Build a buffer ready to hand to several agents
    pub fn build_shared(self) -> Result<Arc<ReplayBuffer>> {
        self.build().map(Arc::new)
    }
}

impl Default for ReplayBufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
