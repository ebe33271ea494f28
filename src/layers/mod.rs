pub mod neuron;
pub mod dense;

pub use dense::Layer;
pub use neuron::Neuron;
