//! One-hot encoders for building network input vectors from categorical data.

use ndarray::Array1;

use crate::error::{QHiveError, Result};

/// One-hot vector of width `len` with a 1.0 at `index`.
pub fn one_hot(index: usize, len: usize) -> Result<Array1<f64>> {
    if index >= len {
        return Err(QHiveError::invalid_parameter(
            "index".to_string(),
            format!("index {} out of range for {} categories", index, len),
        ));
    }
    let mut encoded = Array1::zeros(len);
    encoded[index] = 1.0;
    Ok(encoded)
}

/// One-hot vector for `item` over `categories`.
///
/// An item that is not among the categories encodes as the all-zero vector.
pub fn one_hot_of<T: PartialEq>(item: &T, categories: &[T]) -> Array1<f64> {
    let mut encoded = Array1::zeros(categories.len());
    if let Some(index) = categories.iter().position(|c| c == item) {
        encoded[index] = 1.0;
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_one_hot() {
        assert_eq!(one_hot(1, 3).unwrap(), array![0.0, 1.0, 0.0]);
        assert!(one_hot(3, 3).is_err());
    }

    #[test]
    fn test_one_hot_of_categories() {
        let categories = ["up", "down", "left"];
        assert_eq!(one_hot_of(&"left", &categories), array![0.0, 0.0, 1.0]);
        assert_eq!(one_hot_of(&"right", &categories), array![0.0, 0.0, 0.0]);
    }
}
