use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{QHiveError, Result};
use crate::network::Network;

/// Builder for constructing networks with a fluent API
pub struct NetworkBuilder {
    input_size: Option<usize>,
    hidden: Vec<usize>,
    output_size: Option<usize>,
    seed: Option<u64>,
}

impl NetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        NetworkBuilder {
            input_size: None,
            hidden: Vec::new(),
            output_size: None,
            seed: None,
        }
    }

    /// Set the width of the input vector
    pub fn input_size(mut self, size: usize) -> Self {
        self.input_size = Some(size);
        self
    }

    /// Append a hidden layer
    pub fn hidden_layer(mut self, neurons: usize) -> Self {
        self.hidden.push(neurons);
        self
    }

    /// Append several hidden layers
    pub fn hidden_layers(mut self, widths: &[usize]) -> Self {
        self.hidden.extend_from_slice(widths);
        self
    }

    /// Set the number of outputs
    pub fn output_size(mut self, size: usize) -> Self {
        self.output_size = Some(size);
        self
    }

    /// Seed the weight initialization
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the network
    pub fn build(self) -> Result<Network> {
        let input_size = self.input_size.ok_or_else(|| QHiveError::InvalidParameter {
            name: "input_size".to_string(),
            reason: "Input size not specified".to_string(),
        })?;
        let output_size = self.output_size.ok_or_else(|| QHiveError::InvalidParameter {
            name: "output_size".to_string(),
            reason: "Output size not specified".to_string(),
        })?;

        let mut structure = Vec::with_capacity(self.hidden.len() + 2);
        structure.push(input_size);
        structure.extend(self.hidden);
        structure.push(output_size);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::new(&structure, &mut rng)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
