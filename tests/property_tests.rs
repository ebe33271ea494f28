#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use qhive::activations::relu;
    use qhive::agent::DqnAgent;
    use qhive::config::AgentConfig;
    use qhive::layers::{Layer, Neuron};
    use qhive::loss::squared_error;
    use qhive::network::Network;
    use qhive::replay_buffer::ReplayBuffer;
    use ndarray::{array, Array1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    // Strategy for generating valid layer sizes
    fn layer_sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..=32, 2..=5)
    }

    // Strategy for generating finite input arrays
    fn input_array_strategy(size: usize) -> impl Strategy<Value = Array1<f64>> {
        prop::collection::vec(-100.0f64..100.0, size).prop_map(Array1::from_vec)
    }

    // Strategy for generating a neuron with the given fan-in
    fn neuron_strategy(fan_in: usize) -> impl Strategy<Value = Neuron> {
        (prop::collection::vec(-2.0f64..2.0, fan_in), -1.0f64..1.0)
            .prop_map(|(weights, bias)| Neuron::from_parts(Array1::from_vec(weights), bias))
    }

    proptest! {
        #[test]
        fn test_forward_output_shape(layer_sizes in layer_sizes_strategy(), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let network = Network::new(&layer_sizes, &mut rng).unwrap();
            prop_assert_eq!(network.structure(), layer_sizes.clone());

            let input = Array1::zeros(layer_sizes[0]);
            let record = network.forward_record(input.view()).unwrap();
            for (index, &width) in layer_sizes[1..].iter().enumerate() {
                prop_assert_eq!(record.layer_output(index).unwrap().len(), width);
            }
            prop_assert_eq!(record.output().len(), layer_sizes[layer_sizes.len() - 1]);
        }

        #[test]
        fn test_forward_is_deterministic(input in input_array_strategy(6), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let network = Network::new(&[6, 10, 3], &mut rng).unwrap();

            let first = network.forward(input.view()).unwrap();
            let second = network.forward(input.view()).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(network.forward_record(input.view()).unwrap().into_output(), first);
        }

        #[test]
        fn test_neuron_output_is_relu_of_weighted_sum(
            neurons in prop::collection::vec(neuron_strategy(4), 1..8),
            input in input_array_strategy(4)
        ) {
            let layer = Layer::from_neurons(neurons.clone()).unwrap();
            let output = layer.forward(input.view()).unwrap();

            for (neuron, &out) in neurons.iter().zip(output.iter()) {
                let sum: f64 = neuron.weights.iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f64>() + neuron.bias;
                prop_assert!((out - relu(sum)).abs() <= 1e-9 * (1.0 + sum.abs()));
                prop_assert!(out >= 0.0);
            }
        }

        #[test]
        fn test_single_layer_step_never_increases_loss(
            neurons in prop::collection::vec(neuron_strategy(3), 1..5),
            input in prop::collection::vec(0.0f64..1.0, 3),
            targets in prop::collection::vec(0.0f64..2.0, 5),
            learning_rate in 0.001f64..0.2
        ) {
            let width = neurons.len();
            let mut network = Network::from_layers(vec![Layer::from_neurons(neurons).unwrap()]).unwrap();
            let input = Array1::from_vec(input);
            let target = Array1::from_vec(targets[..width].to_vec());

            let loss1 = network.train(input.view(), target.view(), learning_rate).unwrap();
            let output2 = network.forward(input.view()).unwrap();
            let loss2 = squared_error(output2.view(), target.view());

            prop_assert!(loss2 <= loss1 + 1e-12, "Loss increased from {} to {}", loss1, loss2);
        }

        #[test]
        fn test_small_step_reduces_loss(
            seed in any::<u64>(),
            input in prop::collection::vec(0.1f64..1.0, 3),
            targets in prop::collection::vec(0.5f64..2.0, 2),
            learning_rate in 0.001f64..0.01
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut network = Network::new(&[3, 4, 2], &mut rng).unwrap();
            let input = Array1::from_vec(input);
            let target = Array1::from_vec(targets);

            let loss1 = network.train(input.view(), target.view(), learning_rate).unwrap();
            let loss2 = squared_error(network.forward(input.view()).unwrap().view(), target.view());
            prop_assert!(loss2 < loss1, "Loss did not decrease: {} -> {}", loss1, loss2);
        }

        #[test]
        fn test_replay_buffer_bounded_fifo(capacity in 1usize..50, count in 0usize..200) {
            let buffer = ReplayBuffer::new(capacity);
            for i in 0..count {
                buffer.add(array![i as f64], 0, i as f64, array![0.0], false);
                prop_assert!(buffer.len() <= capacity);
            }
            prop_assert_eq!(buffer.len(), count.min(capacity));

            let kept: Vec<f64> = buffer.snapshot().iter().map(|e| e.reward).collect();
            let expected: Vec<f64> = (count.saturating_sub(capacity)..count).map(|i| i as f64).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn test_sampling_returns_stored_entries(count in 1usize..30, batch in 0usize..60, seed in any::<u64>()) {
            let buffer = ReplayBuffer::new(100);
            for i in 0..count {
                buffer.add(array![i as f64], 0, i as f64, array![0.0], false);
            }
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = buffer.sample(batch, &mut rng).unwrap();
            prop_assert_eq!(sample.len(), batch);
            for experience in &sample {
                prop_assert!((experience.reward as usize) < count);
            }
        }

        #[test]
        fn test_epsilon_never_below_floor(
            decay in 0.0f64..1.0,
            epsilon_min in 0.0f64..0.5,
            linear in any::<bool>(),
            steps in 1usize..30
        ) {
            let buffer = Arc::new(ReplayBuffer::new(10));
            buffer.add(array![1.0], 0, 1.0, array![0.5], false);
            let config = AgentConfig {
                epsilon: 1.0,
                epsilon_decay: decay,
                epsilon_min,
                linear_epsilon_decay: linear,
                batch_size: 1,
                seed: Some(0),
                ..AgentConfig::default()
            };
            let mut agent = DqnAgent::new(&[1, 2, 2], config, buffer).unwrap();

            let mut previous = agent.epsilon();
            for _ in 0..steps {
                agent.train().unwrap();
                prop_assert!(agent.epsilon() >= epsilon_min);
                prop_assert!(agent.epsilon() <= previous);
                previous = agent.epsilon();
            }
        }
    }
}
