use ndarray::{array, Array1};
use crate::activations::{argmax, max_value, relu, relu_derivative, relu_inplace, softmax};

#[test]
fn test_relu() {
    assert_eq!(relu(-1.5), 0.0);
    assert_eq!(relu(0.0), 0.0);
    assert_eq!(relu(2.25), 2.25);

    let mut values = array![-1.0, 0.0, 1.0, 2.0];
    relu_inplace(&mut values);
    assert_eq!(values, array![0.0, 0.0, 1.0, 2.0]);
}

#[test]
fn test_relu_derivative_boundary_is_zero() {
    assert_eq!(relu_derivative(0.0), 0.0);
    assert_eq!(relu_derivative(-3.0), 0.0);
    assert_eq!(relu_derivative(1e-300), 1.0);
    assert_eq!(relu_derivative(7.0), 1.0);
}

#[test]
fn test_softmax() {
    let probs = softmax(array![1.0, 2.0, 3.0].view());
    assert!((probs.sum() - 1.0).abs() < 1e-12);
    assert!(probs[2] > probs[1] && probs[1] > probs[0]);

    // Large logits do not overflow
    let probs = softmax(array![1000.0, 1000.0].view());
    assert!((probs[0] - 0.5).abs() < 1e-12);
    assert!((probs[1] - 0.5).abs() < 1e-12);
}

#[test]
fn test_argmax_first_maximum_wins() {
    assert_eq!(argmax(array![0.1, 0.7, 0.7, 0.2].view()), Some(1));
    assert_eq!(argmax(array![3.0].view()), Some(0));
    assert_eq!(argmax(array![0.0, 0.0, 0.0].view()), Some(0));
    assert_eq!(argmax(Array1::<f64>::zeros(0).view()), None);
    assert_eq!(max_value(array![-2.0, -1.0, -3.0].view()), Some(-1.0));
}

#[test]
fn test_argmax_skips_nan_after_first() {
    assert_eq!(argmax(array![1.0, f64::NAN, 2.0].view()), Some(2));
}
