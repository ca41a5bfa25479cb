use serde::{Deserialize, Serialize};

/// A dense row-major matrix of `f32`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mat {
    /// Elements in row-major order.
    pub data: Vec<f32>,

    /// `[rows, cols]`.
    pub shape: [usize; 2],
}

impl Mat {
    /// Creates a matrix from row-major data.
    pub fn new(data: Vec<f32>, shape: [usize; 2]) -> Self {
        assert_eq!(
            data.len(),
            shape[0] * shape[1],
            "data length does not match shape {:?}",
            shape
        );
        Self { data, shape }
    }

    /// Creates a column vector.
    pub fn column(v: &[f32]) -> Self {
        Self {
            shape: [v.len(), 1],
            data: v.to_vec(),
        }
    }

    pub fn matmul(&self, x: &Mat) -> Self {
        let (m, l, n) = (self.shape[0], self.shape[1], x.shape[1]);
        assert_eq!(
            l, x.shape[0],
            "inner dimensions do not match: {:?} x {:?}",
            self.shape, x.shape
        );

        let mut data = vec![0.0f32; m * n];
        for i in 0..m {
            for j in 0..n {
                let kk = i * n + j;
                for k in 0..l {
                    data[kk] += self.data[i * l + k] * x.data[k * n + j];
                }
            }
        }

        Self {
            shape: [m, n],
            data,
        }
    }

    pub fn add(&self, x: &Mat) -> Self {
        if self.shape != x.shape {
            panic!(
                "Trying to add matrices of different sizes: {:?}",
                (&self.shape, &x.shape)
            );
        }

        let data = self
            .data
            .iter()
            .zip(x.data.iter())
            .map(|(a, b)| *a + *b)
            .collect();

        Mat {
            data,
            shape: self.shape,
        }
    }

    pub fn tanh(&self) -> Self {
        let data = self.data.iter().map(|a| a.tanh()).collect();

        Self {
            data,
            shape: self.shape,
        }
    }
}

impl From<Vec<f32>> for Mat {
    fn from(x: Vec<f32>) -> Self {
        let shape = [x.len(), 1];
        Self { shape, data: x }
    }
}
