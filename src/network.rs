use ndarray::{Array1, ArrayView1, Zip};
use rand::Rng;

use crate::activations::relu_derivative;
use crate::error::{QHiveError, Result};
use crate::layers::Layer;
use crate::loss::squared_error;

/// The activations seen during one forward pass.
///
/// `activations[0]` is the network input and `activations[i + 1]` is the output
/// of layer `i`, so layer `i` read `activations[i]`. A record is produced by
/// [`Network::forward_record`] and consumed by [`Network::backpropagate`]; the
/// backward pass has no other way of learning what the forward pass saw.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardRecord {
    activations: Vec<Array1<f64>>,
}

impl ForwardRecord {
    /// The vector the network was fed.
    pub fn input(&self) -> &Array1<f64> {
        &self.activations[0]
    }

    /// The final layer's output (one Q-value per action).
    pub fn output(&self) -> &Array1<f64> {
        &self.activations[self.activations.len() - 1]
    }

    /// Input of layer `index`.
    pub fn layer_input(&self, index: usize) -> Option<&Array1<f64>> {
        if index + 1 < self.activations.len() {
            self.activations.get(index)
        } else {
            None
        }
    }

    /// Output of layer `index`.
    pub fn layer_output(&self, index: usize) -> Option<&Array1<f64>> {
        self.activations.get(index + 1)
    }

    pub fn into_output(mut self) -> Array1<f64> {
        self.activations.pop().unwrap_or_else(|| Array1::zeros(0))
    }
}

/// A feedforward network of fully connected ReLU layers trained with plain,
/// per-sample stochastic gradient descent under squared-error loss.
///
/// # Examples
///
/// ```
/// use qhive::network::Network;
/// use rand::{rngs::StdRng, SeedableRng};
/// use ndarray::array;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut network = Network::new(&[2, 4, 1], &mut rng).unwrap();
///
/// let input = array![0.5, -0.25];
/// let record = network.forward_record(input.view()).unwrap();
/// network.backpropagate(&record, array![1.0].view(), 0.01).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Create a network from its width sequence, input width first.
    ///
    /// `structure = [4, 8, 2]` builds two layers: 8 neurons with 4 weights each,
    /// then 2 neurons with 8 weights each.
    pub fn new<R: Rng + ?Sized>(structure: &[usize], rng: &mut R) -> Result<Self> {
        if structure.len() < 2 {
            return Err(QHiveError::invalid_parameter(
                "structure",
                "must contain at least an input and an output width",
            ));
        }
        if let Some(position) = structure.iter().position(|&width| width == 0) {
            return Err(QHiveError::invalid_parameter(
                "structure".to_string(),
                format!("width at position {} must be greater than 0", position),
            ));
        }

        let layers = structure
            .windows(2)
            .map(|window| Layer::new(window[1], window[0], rng))
            .collect();

        Ok(Network { layers })
    }

    /// Build a network from existing layers, checking that adjacent widths agree.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self> {
        if layers.is_empty() {
            return Err(QHiveError::invalid_parameter(
                "layers",
                "network must have at least one layer",
            ));
        }
        for (index, pair) in layers.windows(2).enumerate() {
            QHiveError::check_width(
                &format!("layer {} fan-in", index + 1),
                pair[0].len(),
                pair[1].fan_in(),
            )?;
        }
        Ok(Network { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::fan_in)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::len)
    }

    /// The width sequence this network was built from.
    pub fn structure(&self) -> Vec<usize> {
        let mut structure = Vec::with_capacity(self.layers.len() + 1);
        structure.push(self.input_size());
        structure.extend(self.layers.iter().map(Layer::len));
        structure
    }

    /// Feed `inputs` through every layer and return the final output.
    ///
    /// This does not touch the network, so two calls with the same input and no
    /// update in between return identical vectors.
    pub fn forward(&self, inputs: ArrayView1<f64>) -> Result<Array1<f64>> {
        QHiveError::check_width("network input", self.input_size(), inputs.len())?;
        let mut current = inputs.to_owned();
        for layer in &self.layers {
            current = layer.forward(current.view())?;
        }
        Ok(current)
    }

    /// Like [`Network::forward`] but keeps every intermediate activation.
    pub fn forward_record(&self, inputs: ArrayView1<f64>) -> Result<ForwardRecord> {
        QHiveError::check_width("network input", self.input_size(), inputs.len())?;
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(inputs.to_owned());
        for layer in &self.layers {
            let next = layer.forward(activations[activations.len() - 1].view())?;
            activations.push(next);
        }
        Ok(ForwardRecord { activations })
    }

    /// Per-neuron error signals for every layer, output layer last.
    ///
    /// The output layer gets `(output - expected) * relu'(output)`. Each hidden
    /// neuron `j` gets `sum_k next.weights[k][j] * next_gradient[k]` times
    /// `relu'(output_j)`. All derivatives are taken on post-activation outputs.
    pub fn gradients(&self, record: &ForwardRecord, expected_outputs: ArrayView1<f64>) -> Result<Vec<Array1<f64>>> {
        self.check_record(record)?;
        QHiveError::check_width("expected outputs", self.output_size(), expected_outputs.len())?;

        let depth = self.layers.len();
        let mut gradients: Vec<Array1<f64>> = Vec::with_capacity(depth);

        let output = record.output();
        let output_gradient = Zip::from(output)
            .and(&expected_outputs)
            .map_collect(|&out, &expected| (out - expected) * relu_derivative(out));
        gradients.push(output_gradient);

        for index in (0..depth - 1).rev() {
            let next_layer = &self.layers[index + 1];
            let next_gradient = &gradients[gradients.len() - 1];
            let outputs = &record.activations[index + 1];

            let gradient = outputs
                .iter()
                .enumerate()
                .map(|(j, &out)| {
                    let downstream: f64 = next_layer
                        .neurons()
                        .iter()
                        .zip(next_gradient.iter())
                        .map(|(neuron, &g)| neuron.weights[j] * g)
                        .sum();
                    downstream * relu_derivative(out)
                })
                .collect::<Array1<f64>>();
            gradients.push(gradient);
        }

        gradients.reverse();
        Ok(gradients)
    }

    /// One full gradient-descent step for the sample captured in `record`.
    ///
    /// Every gradient is computed before any weight moves, so the backward
    /// sweep reads the weights the forward pass used. The record must come from
    /// this network's current parameters for the step to be a true gradient step.
    pub fn backpropagate(
        &mut self,
        record: &ForwardRecord,
        expected_outputs: ArrayView1<f64>,
        learning_rate: f64,
    ) -> Result<()> {
        let gradients = self.gradients(record, expected_outputs)?;

        for (index, (layer, layer_gradient)) in self.layers.iter_mut().zip(gradients.iter()).enumerate() {
            let inputs = record.activations[index].view();
            for (neuron, &gradient) in layer.neurons_mut().iter_mut().zip(layer_gradient.iter()) {
                neuron.update_weights(gradient, inputs, learning_rate)?;
            }
        }
        Ok(())
    }

    /// Forward, backpropagate towards `expected_outputs`, and return the squared
    /// error measured before the update.
    pub fn train(&mut self, inputs: ArrayView1<f64>, expected_outputs: ArrayView1<f64>, learning_rate: f64) -> Result<f64> {
        let record = self.forward_record(inputs)?;
        QHiveError::check_width("expected outputs", self.output_size(), expected_outputs.len())?;
        let error = squared_error(record.output().view(), expected_outputs);
        self.backpropagate(&record, expected_outputs, learning_rate)?;
        Ok(error)
    }

    fn check_record(&self, record: &ForwardRecord) -> Result<()> {
        if self.layers.is_empty() {
            return Err(QHiveError::invalid_parameter(
                "layers",
                "network must have at least one layer",
            ));
        }
        QHiveError::check_width(
            "forward record depth",
            self.layers.len() + 1,
            record.activations.len(),
        )?;
        for (index, layer) in self.layers.iter().enumerate() {
            QHiveError::check_width(
                &format!("forward record layer {} input", index),
                layer.fan_in(),
                record.activations[index].len(),
            )?;
            QHiveError::check_width(
                &format!("forward record layer {} output", index),
                layer.len(),
                record.activations[index + 1].len(),
            )?;
        }
        Ok(())
    }
}
