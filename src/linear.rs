//! Support for linear algebra.

use std::ops::{Index, IndexMut};

use crate::probs::SliceExt;

/// A dense, row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}
impl Matrix {
    pub fn allocate(rows: usize, cols: usize) -> Self {
        let (len, overflow) = rows.overflowing_mul(cols);
        assert!(!overflow, "allocation of a {rows}x{cols} matrix failed due to overflow");
        let data = vec![0.0; len];
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        debug_assert!(self.validate_row_index(row));
        let row_start = row * self.cols;
        &self.data[row_start..(row_start + self.cols)]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        debug_assert!(self.validate_row_index(row));
        let row_start = row * self.cols;
        &mut self.data[row_start..(row_start + self.cols)]
    }

    pub fn col(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(self.validate_col_index(col));
        (0..self.rows).map(move |row| self.data[row * self.cols + col])
    }

    /// Sums the rows element-wise, yielding one total per column. Rows are accumulated in order.
    pub fn sum_rows(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.cols];
        for row in 0..self.rows {
            totals.add(self.row_slice(row));
        }
        totals
    }

    pub fn flatten(&self) -> &[f64] {
        &self.data
    }

    fn validate_row_index(&self, row: usize) -> bool {
        assert!(row < self.rows, "invalid row index {row} for a {}x{} matrix", self.rows, self.cols);
        true
    }

    fn validate_col_index(&self, col: usize) -> bool {
        assert!(col < self.cols, "invalid column index {col} for a {}x{} matrix", self.rows, self.cols);
        true
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        debug_assert!(self.validate_row_index(row));
        debug_assert!(self.validate_col_index(col));
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        debug_assert!(self.validate_row_index(row));
        debug_assert!(self.validate_col_index(col));
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populate_with_test_data(matrix: &mut Matrix) {
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                matrix[(row, col)] = (row * matrix.cols() + col) as f64 * 10.0;
            }
        }
    }

    #[test]
    fn index() {
        let mut matrix = Matrix::allocate(4, 3);
        assert_eq!(4, matrix.rows());
        assert_eq!(3, matrix.cols());
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                assert_eq!(0.0, matrix[(row, col)]);
                let new_val = (row * matrix.cols() + col) as f64 * 10.0;
                matrix[(row, col)] = new_val;
                assert_eq!(new_val, matrix[(row, col)]);
            }
        }
    }

    #[test]
    #[should_panic = "invalid row index 4 for a 4x3 matrix"]
    fn row_overflow_panics() {
        let matrix = Matrix::allocate(4, 3);
        let _ = matrix[(matrix.rows(), 0)];
    }

    #[test]
    #[should_panic = "invalid column index 3 for a 4x3 matrix"]
    fn col_overflow_panics() {
        let matrix = Matrix::allocate(4, 3);
        let _ = matrix[(0, matrix.cols())];
    }

    #[test]
    #[should_panic]
    fn allocate_overflow_panics() {
        Matrix::allocate(usize::MAX, 2);
    }

    #[test]
    fn row_slice() {
        let mut matrix = Matrix::allocate(4, 3);
        populate_with_test_data(&mut matrix);
        assert_eq!(&[0.0, 10.0, 20.0], matrix.row_slice(0));
        matrix.row_slice_mut(1).copy_from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(&[1.0, 2.0, 3.0], matrix.row_slice(1));
    }

    #[test]
    fn col() {
        let mut matrix = Matrix::allocate(3, 2);
        populate_with_test_data(&mut matrix);
        assert_eq!(vec![10.0, 30.0, 50.0], matrix.col(1).collect::<Vec<_>>());
    }

    #[test]
    fn sum_rows() {
        let mut matrix = Matrix::allocate(3, 2);
        populate_with_test_data(&mut matrix);
        assert_eq!(vec![60.0, 90.0], matrix.sum_rows());
        assert_eq!(&[0.0, 10.0, 20.0, 30.0, 40.0, 50.0], matrix.flatten());
    }

    #[test]
    fn sum_rows_empty() {
        let matrix = Matrix::allocate(0, 2);
        assert_eq!(vec![0.0, 0.0], matrix.sum_rows());
    }
}
