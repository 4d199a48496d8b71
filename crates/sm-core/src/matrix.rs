use std::fmt;

use crate::error::{MatrixError, Result};
use crate::view::{MatMut, MatRef, SubmatrixView};

/// Scalar type stored in every matrix.
///
/// Arithmetic on elements wraps on overflow so that every multiplication
/// path produces the same bits for the same operands.
pub type Element = i64;

/// Matrices with more rows than this are summarized rather than printed.
pub const MAX_DISPLAY_DIM: usize = 16;

/// A dense integer matrix.
///
/// Holds a contiguous, row-major buffer together with its row and column
/// extents. Arithmetic is not a method of `Matrix`; it goes through
/// [`MatRef`]/[`MatMut`] views so the same storage can act as operand or
/// destination at any depth of a recursive multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

/// Number of elements in a `rows x cols` buffer.
///
/// # Errors
/// Returns `SizeOverflow` if the count does not fit in `usize`.
pub fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::SizeOverflow { rows, cols })
}

fn element_count_or_panic(rows: usize, cols: usize) -> usize {
    match element_count(rows, cols) {
        Ok(n) => n,
        Err(e) => panic!("{}", e),
    }
}

impl Matrix {
    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    /// Returns `SizeOverflow` if `rows * cols` overflows and `ShapeMismatch`
    /// if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a zero-filled matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::filled(rows, cols, 0)
    }

    /// Create a matrix with every element set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: Element) -> Self {
        let n = element_count_or_panic(rows, cols);
        Matrix {
            rows,
            cols,
            data: vec![value; n],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Build a matrix by evaluating `f(row, col)` for every element.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Element,
    {
        let mut data = Vec::with_capacity(element_count_or_panic(rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// # Panics
    /// Panics if the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Element {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    /// # Panics
    /// Panics if the position lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: Element) {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col] = value;
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.data
    }

    pub fn fill(&mut self, value: Element) {
        self.data.fill(value);
    }

    /// The view covering the whole matrix.
    pub fn whole(&self) -> SubmatrixView {
        SubmatrixView::whole(self.rows, self.cols)
    }

    /// Borrow the whole matrix for reading.
    pub fn view(&self) -> MatRef<'_> {
        MatRef::new(&self.data, self.cols, self.whole())
    }

    /// Borrow the whole matrix for writing.
    pub fn view_mut(&mut self) -> MatMut<'_> {
        let whole = self.whole();
        MatMut::new(&mut self.data, self.cols, whole)
    }

    /// Borrow a region of the matrix for writing.
    pub fn region_mut(&mut self, view: SubmatrixView) -> MatMut<'_> {
        MatMut::new(&mut self.data, self.cols, view)
    }

    /// Exact elementwise comparison.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn matches(&self, other: &Matrix) -> Result<bool> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, self.cols),
                got: (other.rows, other.cols),
            });
        }
        Ok(self.data == other.data)
    }

    /// Elements on the main diagonal, top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<Element> {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i * self.cols + i])
            .collect()
    }
}

impl fmt::Display for Matrix {
    /// Prints space-separated rows for small matrices and a one-line summary
    /// for anything taller than [`MAX_DISPLAY_DIM`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows > MAX_DISPLAY_DIM {
            return write!(f, "Matrix[{} x {}]", self.rows, self.cols);
        }
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
