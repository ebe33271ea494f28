/// A macro to create a new `Network` from its widths.
///
/// # Examples
///
/// ```
/// use qhive::create_network;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let network = create_network!(&mut rng; 4, 8, 2).unwrap();
/// assert_eq!(network.structure(), vec![4, 8, 2]);
/// ```
///
/// This creates a network with two layers: 8 neurons reading a 4-wide input,
/// then 2 output neurons reading those 8 values.
#[macro_export]
macro_rules! create_network {
    ($rng:expr; $( $width:expr ),+ $(,)?) => {
        $crate::network::Network::new(&[$( $width ),+], $rng)
    };
}

/// A macro to create a new `Layer`.
///
/// # Examples
///
/// ```
/// use qhive::create_layer;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let layer = create_layer!(&mut rng; 4 => 32);
/// assert_eq!(layer.fan_in(), 4);
/// assert_eq!(layer.len(), 32);
/// ```
#[macro_export]
macro_rules! create_layer {
    ($rng:expr; $fan_in:expr => $neurons:expr) => {
        $crate::layers::Layer::new($neurons, $fan_in, $rng)
    };
}
