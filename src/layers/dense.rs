use ndarray::{Array1, ArrayView1};
use rand::Rng;

use super::neuron::Neuron;
use crate::error::{QHiveError, Result};

/// A fully connected layer of ReLU neurons that all read the same input vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    fan_in: usize,
}

impl Layer {
    /// Create a layer of `neuron_count` freshly initialized neurons, each with
    /// `fan_in` weights.
    pub fn new<R: Rng + ?Sized>(neuron_count: usize, fan_in: usize, rng: &mut R) -> Self {
        let neurons = (0..neuron_count).map(|_| Neuron::new(fan_in, rng)).collect();
        Layer { neurons, fan_in }
    }

    /// Build a layer from existing neurons. Every neuron must have the same fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self> {
        let fan_in = match neurons.first() {
            Some(neuron) => neuron.fan_in(),
            None => {
                return Err(QHiveError::invalid_parameter(
                    "neurons",
                    "a layer needs at least one neuron",
                ))
            }
        };
        for neuron in &neurons {
            QHiveError::check_width("layer neuron fan-in", fan_in, neuron.fan_in())?;
        }
        Ok(Layer { neurons, fan_in })
    }

    /// Number of neurons, which is also the width of this layer's output.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn fan_in(&self) -> usize {
        self.fan_in
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Feed the same `inputs` to every neuron and collect their outputs in order.
    pub fn forward(&self, inputs: ArrayView1<f64>) -> Result<Array1<f64>> {
        QHiveError::check_width("layer input", self.fan_in, inputs.len())?;
        self.neurons.iter().map(|neuron| neuron.forward(inputs)).collect()
    }
}
