//! Exact solving of linear systems `A * x = b` over the integers.
//!
//! The system is kept as a single augmented grid `[A | b]` and brought into reduced,
//! fraction-free row-echelon form by [AugmentedSystem::solve]. All intermediate values stay
//! integers: rows are combined by cross-multiplication and divided by their content, so no
//! rational arithmetic is ever needed.
//!
//! ```
//! use linsys::{domains::integer::Z, linear_system::AugmentedSystem, matrix::Matrix};
//!
//! let a = Matrix::from_linear(vec![1.into(), 1.into()], 1, 2, Z).unwrap();
//! let b = Matrix::new_vec(vec![2.into()], Z);
//!
//! let mut system = AugmentedSystem::new(&a, &b).unwrap();
//! system.solve();
//!
//! // x1 = -x2 + 2
//! let s = system.get_solutions();
//! assert_eq!(s.len(), 1);
//! assert_eq!(s[0].to_string(), "x1 = -x2+2");
//! ```
mod reduce;
mod solution;

use std::{borrow::Cow, fmt::Display};

use tracing::{debug, instrument};

use crate::{
    domains::ExactDomain,
    matrix::{Matrix, MatrixError},
};

pub use solution::{Solution, SolutionSet, Term};

/// The stage of the reduction an [AugmentedSystem] is in.
/// [AugmentedSystem::solve] moves through the stages in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReductionState {
    Unreduced,
    /// Every row is divided by its content and has a positive leading entry.
    RowNormalized,
    RowEchelon,
    ReducedRowEchelon,
}

/// A system of linear equations, stored as the augmented grid `[A | b]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AugmentedSystem<F: ExactDomain> {
    grid: Matrix<F>,
    state: ReductionState,
}

impl<F: ExactDomain> AugmentedSystem<F> {
    /// Create the system `coefficients * x = rhs`. Both matrices are copied.
    ///
    /// Fails when `rhs` is not a column vector with one entry per equation.
    pub fn new(coefficients: &Matrix<F>, rhs: &Matrix<F>) -> Result<Self, MatrixError> {
        if rhs.ncols != 1 || rhs.nrows != coefficients.nrows {
            return Err(MatrixError::DimensionMismatch {
                left: (coefficients.nrows, coefficients.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }

        let ncols = coefficients.ncols + 1;
        let mut data = Vec::with_capacity(coefficients.nrows as usize * ncols as usize);
        for r in 0..coefficients.nrows {
            data.extend_from_slice(coefficients.row(r));
            data.push(rhs[(r, 0)].clone());
        }

        let grid = Matrix::from_linear(data, coefficients.nrows, ncols, coefficients.field.clone())?;
        Ok(AugmentedSystem {
            grid,
            state: ReductionState::Unreduced,
        })
    }

    /// Create a system from an augmented grid, whose last column is the right-hand side.
    pub fn from_augmented(grid: Matrix<F>) -> Result<Self, MatrixError> {
        if grid.ncols == 0 {
            return Err(MatrixError::DimensionMismatch {
                left: (grid.nrows, 0),
                right: (grid.nrows, 1),
            });
        }

        Ok(AugmentedSystem {
            grid,
            state: ReductionState::Unreduced,
        })
    }

    /// Bring the augmented grid into reduced, fraction-free row-echelon form.
    ///
    /// Afterwards every pivot lies strictly right of the pivot of the row above it, every pivot
    /// column is zero outside its pivot row, and every row has coprime entries with a positive
    /// leading entry. Solving an already reduced system leaves it unchanged.
    #[instrument(level = "debug", skip_all, fields(equations = self.grid.nrows, variables = self.grid.ncols - 1))]
    pub fn solve(&mut self) {
        let nvars = self.grid.ncols - 1;

        for r in 0..self.grid.nrows {
            self.grid.simplify_row(r);
        }
        self.state = ReductionState::RowNormalized;
        debug!("normalized rows");

        let rank = self.grid.fraction_free_echelon(nvars);
        self.state = ReductionState::RowEchelon;
        debug!(rank, "reached row echelon form");

        self.grid.fraction_free_back_substitution(nvars);
        self.state = ReductionState::ReducedRowEchelon;
        debug!("reached reduced row echelon form");
    }

    /// Get the current stage of the reduction.
    pub fn state(&self) -> ReductionState {
        self.state
    }

    /// Get the augmented grid `[A | b]` in its current state.
    pub fn augmented(&self) -> &Matrix<F> {
        &self.grid
    }

    /// Get a copy of the coefficient part `A` of the grid in its current state.
    pub fn coefficients(&self) -> Matrix<F> {
        let nvars = self.grid.ncols - 1;
        let mut data = Vec::with_capacity(self.grid.nrows as usize * nvars as usize);
        for row in self.grid.row_iter() {
            data.extend_from_slice(&row[..nvars as usize]);
        }

        Matrix {
            data,
            nrows: self.grid.nrows,
            ncols: nvars,
            field: self.grid.field.clone(),
        }
    }

    /// Get a copy of the right-hand side `b` of the grid in its current state.
    pub fn rhs(&self) -> Matrix<F> {
        Matrix::new_vec(
            self.grid.column(self.grid.ncols - 1).cloned().collect(),
            self.grid.field.clone(),
        )
    }

    pub fn num_variables(&self) -> usize {
        self.grid.ncols() - 1
    }

    pub fn num_equations(&self) -> usize {
        self.grid.nrows()
    }

    /// Get the system in reduced form, reducing a copy when needed.
    pub(crate) fn reduced(&self) -> Cow<'_, Self> {
        if self.state == ReductionState::ReducedRowEchelon {
            Cow::Borrowed(self)
        } else {
            let mut s = self.clone();
            s.solve();
            Cow::Owned(s)
        }
    }

    /// Get the rank of the coefficient matrix.
    pub fn rank(&self) -> usize {
        let s = self.reduced();
        let nvars = s.grid.ncols - 1;
        (0..s.grid.nrows)
            .filter(|&r| s.grid.pivot_column(r, nvars).is_some())
            .count()
    }

    /// Return `false` iff the system has a row encoding `0 = c` with nonzero `c`.
    pub fn is_consistent(&self) -> bool {
        let s = self.reduced();
        let nvars = s.grid.ncols - 1;
        (0..s.grid.nrows).all(|r| {
            s.grid.pivot_column(r, nvars).is_some() || F::is_zero(&s.grid[(r, nvars)])
        })
    }
}

impl<F: ExactDomain> Display for AugmentedSystem<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nvars = self.grid.ncols() - 1;
        for (ri, row) in self.grid.row_iter().enumerate() {
            if ri > 0 {
                writeln!(f)?;
            }

            for e in &row[..nvars] {
                write!(f, "{} ", e)?;
            }
            write!(f, "| {}", row[nvars])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::integer::{Integer, Z},
        matrix::{Matrix, MatrixError},
    };

    use super::{AugmentedSystem, ReductionState};

    fn system(rows: &[&[i64]]) -> AugmentedSystem<crate::domains::integer::IntegerRing> {
        let grid = Matrix::from_nested_vec(
            rows.iter()
                .map(|r| r.iter().map(|&x| Integer::from(x)).collect())
                .collect(),
            Z,
        )
        .unwrap();
        AugmentedSystem::from_augmented(grid).unwrap()
    }

    fn grid(rows: &[&[i64]]) -> Matrix<crate::domains::integer::IntegerRing> {
        system(rows).augmented().clone()
    }

    #[test]
    fn construct() {
        let a = Matrix::from_linear(
            vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into(), 6.into()],
            2,
            3,
            Z,
        )
        .unwrap();
        let b = Matrix::new_vec(vec![7.into(), 8.into()], Z);

        let s = AugmentedSystem::new(&a, &b).unwrap();
        assert_eq!(s.augmented(), &grid(&[&[1, 2, 3, 7], &[4, 5, 6, 8]]));
        assert_eq!(s.coefficients(), a);
        assert_eq!(s.rhs(), b);
        assert_eq!(s.num_variables(), 3);
        assert_eq!(s.num_equations(), 2);
        assert_eq!(s.state(), ReductionState::Unreduced);
        assert_eq!(s.to_string(), "1 2 3 | 7\n4 5 6 | 8");
    }

    #[test]
    fn construct_bad_shape() {
        let a = Matrix::new(2, 3, Z);

        assert_eq!(
            AugmentedSystem::new(&a, &Matrix::new(3, 1, Z)),
            Err(MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (3, 1)
            })
        );
        assert!(AugmentedSystem::new(&a, &Matrix::new(2, 2, Z)).is_err());
        assert!(AugmentedSystem::from_augmented(Matrix::new(2, 0, Z)).is_err());
    }

    #[test]
    fn no_aliasing() {
        let mut a = Matrix::from_linear(vec![2.into(), 4.into()], 1, 2, Z).unwrap();
        let b = Matrix::new_vec(vec![6.into()], Z);

        let mut s = AugmentedSystem::new(&a, &b).unwrap();
        a[(0, 0)] = 5.into();
        s.solve();

        assert_eq!(a.data, vec![5, 4]);
        assert_eq!(s.augmented(), &grid(&[&[1, 2, 3]]));
    }

    #[test]
    fn worked_example() {
        let mut s = system(&[
            &[-4, 3, -3, 5, 9],
            &[6, 0, -18, 6, -18],
            &[-8, 6, -6, 10, 18],
            &[1, -4, 17, -11, 1],
        ]);

        assert_eq!(s.rank(), 2);
        assert!(s.is_consistent());
        assert_eq!(s.state(), ReductionState::Unreduced);

        s.solve();
        assert_eq!(s.state(), ReductionState::ReducedRowEchelon);
        assert_eq!(
            s.augmented(),
            &grid(&[
                &[1, 0, -3, 1, -3],
                &[0, 1, -5, 3, -1],
                &[0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0]
            ])
        );
        assert_eq!(s.rank(), 2);
    }

    #[test]
    fn solve_is_idempotent() {
        let mut s = system(&[&[2, 4, -6, 8], &[1, 3, 5, 7], &[0, 1, 0, 2]]);
        s.solve();
        let reduced = s.clone();
        assert_eq!(
            s.augmented(),
            &grid(&[&[8, 0, 0, 3], &[0, 1, 0, 2], &[0, 0, 8, 1]])
        );

        s.solve();
        assert_eq!(s, reduced);
    }

    #[test]
    fn inconsistent() {
        let mut s = system(&[&[1, 1, 2], &[1, 1, 3]]);
        assert!(!s.is_consistent());

        s.solve();
        assert_eq!(s.augmented(), &grid(&[&[1, 1, 2], &[0, 0, 1]]));
        assert_eq!(s.rank(), 1);
        assert!(!s.is_consistent());
    }

    #[test]
    fn empty_systems() {
        let mut s = AugmentedSystem::from_augmented(Matrix::new(0, 3, Z)).unwrap();
        s.solve();
        assert_eq!(s.rank(), 0);
        assert!(s.is_consistent());
        assert_eq!(s.to_string(), "");

        let mut s = system(&[&[0, 0, 0], &[0, 0, 0]]);
        s.solve();
        assert_eq!(s.rank(), 0);
        assert!(s.is_consistent());

        let mut s = system(&[&[5], &[0]]);
        s.solve();
        assert_eq!(s.augmented(), &grid(&[&[1], &[0]]));
        assert!(!s.is_consistent());
    }
}
