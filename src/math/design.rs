//! Polynomial design matrix.
//!
//! For a degree-`d` fit over observations `x_i`, the design matrix row is
//!
//! ```text
//! [x_i^d, x_i^(d-1), ..., x_i, 1]
//! ```
//!
//! Powers descend left to right so the least-squares solution vector comes out
//! highest-degree term first, matching the coefficient order used everywhere
//! else in the crate.

use nalgebra::DMatrix;

/// Build the Vandermonde matrix for `xs` with descending powers.
pub fn vandermonde(xs: &[f64], degree: usize) -> DMatrix<f64> {
    DMatrix::from_fn(xs.len(), degree + 1, |i, j| {
        xs[i].powi((degree - j) as i32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_one_rows() {
        let m = vandermonde(&[0.0, 2.0, 3.0], 1);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        // Row for x = 2: [2, 1]
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(1, 1)], 1.0);
    }

    #[test]
    fn degree_two_descending_powers() {
        let m = vandermonde(&[3.0], 2);
        assert_eq!(m[(0, 0)], 9.0);
        assert_eq!(m[(0, 1)], 3.0);
        assert_eq!(m[(0, 2)], 1.0);
    }
}
