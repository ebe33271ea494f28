use ndarray::{Array1, ArrayView1, Zip};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::activations::relu;
use crate::error::{QHiveError, Result};

/// Upper bound (exclusive) of the uniform range used for fresh weights and biases.
pub const INIT_RANGE: f64 = 0.1;

/// A single ReLU unit: a weighted sum of its inputs plus a bias, clamped at zero.
///
/// A neuron holds only its parameters. The inputs and gradient needed by the
/// weight update are passed in explicitly by [`crate::network::Network`], which
/// takes them from a [`crate::network::ForwardRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    pub weights: Array1<f64>,
    pub bias: f64,
}

impl Neuron {
    /// Create a neuron with `fan_in` weights. Weights and bias are drawn
    /// uniformly from `[0, 0.1)`.
    pub fn new<R: Rng + ?Sized>(fan_in: usize, rng: &mut R) -> Self {
        let distribution = Uniform::new(0.0, INIT_RANGE);
        let weights = Array1::random_using(fan_in, distribution, rng);
        let bias = rng.gen_range(0.0..INIT_RANGE);
        Neuron { weights, bias }
    }

    /// Create a neuron from explicit parameters.
    pub fn from_parts(weights: Array1<f64>, bias: f64) -> Self {
        Neuron { weights, bias }
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    /// `dot(weights, inputs) + bias`, before the activation.
    pub fn pre_activation(&self, inputs: ArrayView1<f64>) -> Result<f64> {
        QHiveError::check_width("neuron input", self.weights.len(), inputs.len())?;
        Ok(self.weights.dot(&inputs) + self.bias)
    }

    /// `max(0, dot(weights, inputs) + bias)`.
    pub fn forward(&self, inputs: ArrayView1<f64>) -> Result<f64> {
        self.pre_activation(inputs).map(relu)
    }

    /// One plain SGD step: `w[i] -= lr * gradient * inputs[i]` and
    /// `bias -= lr * gradient`.
    ///
    /// `inputs` must be the vector this neuron saw on the forward pass that
    /// produced `gradient`.
    pub fn update_weights(&mut self, gradient: f64, inputs: ArrayView1<f64>, learning_rate: f64) -> Result<()> {
        QHiveError::check_width("neuron update inputs", self.weights.len(), inputs.len())?;
        Zip::from(&mut self.weights)
            .and(&inputs)
            .for_each(|w, &x| *w -= learning_rate * gradient * x);
        self.bias -= learning_rate * gradient;
        Ok(())
    }
}
