use ndarray::{Array1, ArrayView1};

/// Rectified linear unit, `max(0, x)`.
#[inline]
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Derivative of ReLU evaluated on the post-activation output.
///
/// Returns 1 for `output > 0` and 0 otherwise, including the boundary
/// `output == 0`. Since ReLU is zero exactly when its input is non-positive,
/// this matches the derivative taken on the pre-activation sum everywhere
/// except at the kink, where the derivative is taken as 0.
#[inline]
pub fn relu_derivative(output: f64) -> f64 {
    if output > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Apply ReLU to every element in-place.
pub fn relu_inplace(values: &mut Array1<f64>) {
    values.mapv_inplace(relu);
}

/// Numerically stable softmax: the maximum logit is subtracted before
/// exponentiating. An empty input yields an empty output.
pub fn softmax(logits: ArrayView1<f64>) -> Array1<f64> {
    let max_logit = logits.iter().fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    let exps = logits.mapv(|v| (v - max_logit).exp());
    let sum = exps.sum();
    exps / sum
}

/// Index of the first maximum value, or `None` for an empty slice.
///
/// Only a strictly greater value replaces the current best, so ties resolve to
/// the lowest index. NaN entries never compare greater and are skipped unless
/// they sit at index 0.
pub fn argmax(values: ArrayView1<f64>) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut best_index, mut best_value) = match iter.next() {
        Some((i, &v)) => (i, v),
        None => return None,
    };
    for (i, &v) in iter {
        if v > best_value {
            best_index = i;
            best_value = v;
        }
    }
    Some(best_index)
}

/// Maximum value, or `None` for an empty slice. Uses the same scan as [`argmax`].
pub fn max_value(values: ArrayView1<f64>) -> Option<f64> {
    argmax(values).map(|i| values[i])
}
