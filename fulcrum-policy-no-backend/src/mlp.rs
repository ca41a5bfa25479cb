use crate::Mat;
use serde::{Deserialize, Serialize};

/// Multilayer perceptron with tanh activation functions.
///
/// The output layer is tanh-squashed as well, which bounds the network
/// output to `[-1, 1]`, the actuation range of the balancing task.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mlp {
    /// Weights of layers.
    ws: Vec<Mat>,

    /// Biases of layers.
    bs: Vec<Mat>,
}

impl Mlp {
    /// Creates a network from per-layer weights and biases.
    pub fn new(ws: Vec<Mat>, bs: Vec<Mat>) -> Self {
        assert_eq!(ws.len(), bs.len(), "one bias per weight layer");
        Self { ws, bs }
    }

    /// Runs the forward pass on a column vector.
    pub fn forward(&self, x: &Mat) -> Mat {
        let n_layers = self.ws.len();
        let mut x = x.clone();
        for i in 0..n_layers {
            x = self.ws[i].matmul(&x).add(&self.bs[i]).tanh();
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer_forward() {
        // y = tanh(2 x + 0.1)
        let mlp = Mlp::new(
            vec![Mat::new(vec![2.0], [1, 1])],
            vec![Mat::column(&[0.1])],
        );
        let y = mlp.forward(&Mat::column(&[0.3]));

        assert!((y.data[0] - 0.7f32.tanh()).abs() < 1e-6);
    }

    #[test]
    fn test_two_layer_shapes() {
        let mlp = Mlp::new(
            vec![
                Mat::new(vec![0.1; 8 * 4], [8, 4]),
                Mat::new(vec![0.1; 8], [1, 8]),
            ],
            vec![Mat::column(&[0.0; 8]), Mat::column(&[0.0])],
        );
        let y = mlp.forward(&Mat::column(&[0.5, -0.5, 0.25, 0.0]));

        assert_eq!(y.shape, [1, 1]);
        assert!(y.data[0].abs() <= 1.0);
    }
}
