use ndarray::ArrayView1;

/// Sum of squared differences between `prediction` and `target`.
///
/// Slices of different length are compared over their common prefix.
pub fn squared_error(prediction: ArrayView1<f64>, target: ArrayView1<f64>) -> f64 {
    prediction
        .iter()
        .zip(target.iter())
        .map(|(p, t)| (p - t) * (p - t))
        .sum()
}

/// [`squared_error`] divided by the number of compared elements; 0 for empty input.
pub fn mean_squared_error(prediction: ArrayView1<f64>, target: ArrayView1<f64>) -> f64 {
    let n = prediction.len().min(target.len());
    if n == 0 {
        return 0.0;
    }
    squared_error(prediction, target) / n as f64
}
