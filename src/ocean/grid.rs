//! Regular sampling grid over the sea surface.

use ndarray::{Array1, Array2};

/// Meshgrid coordinate arrays, rows follow Y and columns follow X
#[derive(Debug, Clone)]
pub struct Grid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
}

impl Grid {
    /// Sample `resolution` evenly spaced points along each axis, spanning
    /// [0, length] x [0, width] with both endpoints included
    pub fn new(length_m: f64, width_m: f64, resolution: usize) -> Self {
        let xs = Array1::linspace(0.0, length_m, resolution);
        let ys = Array1::linspace(0.0, width_m, resolution);
        let shape = (ys.len(), xs.len());

        Self {
            x: Array2::from_shape_fn(shape, |(_, col)| xs[col]),
            y: Array2::from_shape_fn(shape, |(row, _)| ys[row]),
        }
    }

    /// (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.x.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_extent() {
        let grid = Grid::new(150.0, 80.0, 100);
        assert_eq!(grid.dim(), (100, 100));
        assert_eq!(grid.y.dim(), (100, 100));

        assert_eq!(grid.x[[0, 0]], 0.0);
        assert_eq!(grid.y[[0, 0]], 0.0);
        assert!((grid.x[[0, 99]] - 150.0).abs() < 1e-9);
        assert!((grid.y[[99, 0]] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_meshgrid_layout() {
        let grid = Grid::new(4.0, 2.0, 3);

        // X varies along columns only
        for row in 0..3 {
            assert_eq!(grid.x[[row, 1]], 2.0);
        }
        // Y varies along rows only
        for col in 0..3 {
            assert_eq!(grid.y[[1, col]], 1.0);
        }
    }

    #[test]
    fn test_spacing_scales_with_extent() {
        let small = Grid::new(10.0, 10.0, 11);
        let large = Grid::new(100.0, 100.0, 11);
        assert!((small.x[[0, 1]] - 1.0).abs() < 1e-12);
        assert!((large.x[[0, 1]] - 10.0).abs() < 1e-12);
    }
}
