//! Dense matrices over a ring.
use std::{
    fmt::{Display, Write},
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
    slice::Chunks,
};

use crate::domains::Ring;

/// Errors that can occur when constructing, indexing or combining matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The shapes of the operands are incompatible for the requested operation.
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },
    /// An entry was requested outside of the matrix.
    IndexOutOfRange { index: (u32, u32), shape: (u32, u32) },
    NotRectangular,
    /// The length of the linear data does not match the requested shape.
    DataLength { len: usize, shape: (u32, u32) },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: ({},{}) vs ({},{})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfRange { index, shape } => write!(
                f,
                "Index ({},{}) is out of range for a matrix of shape ({},{})",
                index.0, index.1, shape.0, shape.1
            ),
            MatrixError::NotRectangular => write!(f, "Matrix is not rectangular"),
            MatrixError::DataLength { len, shape } => write!(
                f,
                "Data length does not match matrix dimensions: {} vs ({},{})",
                len, shape.0, shape.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// A matrix with entries that are elements of a ring `F`, stored in row-major order.
/// A vector can be represented as a matrix with one row or one column.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
        }
    }

    /// Create a new column vector from a list of scalars.
    pub fn new_vec(data: Vec<F::Element>, field: F) -> Matrix<F> {
        Matrix {
            nrows: data.len() as u32,
            ncols: 1,
            data,
            field,
        }
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                data,
                nrows,
                ncols,
                field,
            })
        } else {
            Err(MatrixError::DataLength {
                len: data.len(),
                shape: (nrows, ncols),
            })
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<F::Element>>, field: F) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len() as u32;
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows as usize * ncols);
        for d in matrix {
            if d.len() != ncols {
                return Err(MatrixError::NotRectangular);
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols: ncols as u32,
            field,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return the ring of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> Result<usize, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: (row, col),
                shape: (self.nrows, self.ncols),
            });
        }

        Ok(row as usize * self.ncols as usize + col as usize)
    }

    /// Get the entry in row `row` and column `col`.
    pub fn get(&self, row: u32, col: u32) -> Result<&F::Element, MatrixError> {
        let i = self.offset(row, col)?;
        Ok(&self.data[i])
    }

    /// Get a mutable reference to the entry in row `row` and column `col`.
    pub fn get_mut(&mut self, row: u32, col: u32) -> Result<&mut F::Element, MatrixError> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Get the `row`th row of the matrix.
    ///
    /// Panics when the row is out of range.
    pub fn row(&self, row: u32) -> &[F::Element] {
        if row >= self.nrows {
            panic!(
                "{}",
                MatrixError::IndexOutOfRange {
                    index: (row, 0),
                    shape: (self.nrows, self.ncols),
                }
            );
        }

        let start = row as usize * self.ncols as usize;
        &self.data[start..start + self.ncols as usize]
    }

    /// Get the `row`th row of the matrix as a mutable slice.
    ///
    /// Panics when the row is out of range.
    pub fn row_mut(&mut self, row: u32) -> &mut [F::Element] {
        if row >= self.nrows {
            panic!(
                "{}",
                MatrixError::IndexOutOfRange {
                    index: (row, 0),
                    shape: (self.nrows, self.ncols),
                }
            );
        }

        let start = row as usize * self.ncols as usize;
        &mut self.data[start..start + self.ncols as usize]
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        // chunks panics on a zero chunk size
        self.data.chunks(self.ncols.max(1) as usize)
    }

    /// Return an iterator over the entries of column `col`, from top to bottom.
    pub fn column(&self, col: u32) -> impl Iterator<Item = &F::Element> {
        let skip = if col < self.ncols {
            col as usize
        } else {
            self.data.len()
        };
        self.data.iter().skip(skip).step_by(self.ncols.max(1) as usize)
    }

    /// Return an iterator over all entries together with their `(row, column)` index,
    /// in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), &F::Element)> {
        let ncols = self.ncols.max(1) as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, e)| (((i / ncols) as u32, (i % ncols) as u32), e))
    }

    /// Swap row `i` and row `j`.
    pub fn swap_rows(&mut self, i: u32, j: u32) {
        if i == j {
            return;
        }

        for l in 0..self.ncols as usize {
            self.data.swap(
                i as usize * self.ncols as usize + l,
                j as usize * self.ncols as usize + l,
            );
        }
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| F::is_zero(e))
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)].clone();
            }
        }
        m
    }

    /// Compute the sum of the entries on the main diagonal of a square matrix.
    pub fn trace(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::DimensionMismatch {
                left: (self.nrows, self.ncols),
                right: (self.ncols, self.nrows),
            });
        }

        let mut res = self.field.zero();
        for i in 0..self.nrows {
            self.field.add_assign(&mut res, &self[(i, i)]);
        }
        Ok(res)
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    fn check_same_shape(&self, rhs: &Matrix<F>) -> Result<(), MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            Err(MatrixError::DimensionMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            })
        } else {
            Ok(())
        }
    }

    /// Add two matrices of the same shape.
    pub fn try_add(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        self.check_same_shape(rhs)?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.add(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        })
    }

    /// Subtract two matrices of the same shape.
    pub fn try_sub(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        self.check_same_shape(rhs)?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.sub(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        })
    }

    /// Multiply two matrices, where the number of columns of `self` must equal the
    /// number of rows of `rhs`.
    pub fn try_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let sum = &mut m[(i, j)];
                for k in 0..self.ncols {
                    self.field.add_mul_assign(sum, &self[(i, k)], &rhs[(k, j)]);
                }
            }
        }

        Ok(m)
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        match self.get(index.0, index.1) {
            Ok(e) => e,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        match self.get_mut(index.0, index.1) {
            Ok(e) => e,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (ri, r) in self.row_iter().enumerate() {
            f.write_char('{')?;
            for (ci, c) in r.iter().enumerate() {
                write!(f, "{}", c)?;
                if ci + 1 < self.ncols as usize {
                    f.write_char(',')?;
                }
            }
            f.write_char('}')?;
            if ri + 1 < self.nrows as usize {
                f.write_char(',')?;
            }
        }
        f.write_char('}')
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("Cannot add matrices: {}", e),
        }
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("Cannot subtract matrices: {}", e),
        }
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("Cannot multiply matrices: {}", e),
        }
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}
