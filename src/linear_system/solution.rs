use std::fmt::Display;

use rug::Rational;
use smallvec::SmallVec;
use tracing::debug;

use crate::domains::{integer::Integer, ExactDomain};

use super::{AugmentedSystem, ReductionState};

/// A term `coefficient * x_variable`. Variables are numbered from 1;
/// the variable index 0 denotes a constant term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term<E> {
    pub coefficient: E,
    pub variable: u32,
}

impl<E> Term<E> {
    pub fn constant(coefficient: E) -> Term<E> {
        Term {
            coefficient,
            variable: 0,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.variable == 0
    }
}

/// The solution for a pivot variable, `variable.coefficient * x_variable = expression[0] + expression[1] + ...`,
/// where every term of the expression is either a constant or refers to a free variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution<E> {
    pub variable: Term<E>,
    pub expression: SmallVec<[Term<E>; 4]>,
}

impl<E> Solution<E> {
    /// Get the constant term of the expression, if there is one.
    pub fn constant(&self) -> Option<&E> {
        self.expression
            .iter()
            .find(|t| t.is_constant())
            .map(|t| &t.coefficient)
    }

    /// Return true iff the expression does not depend on any free variable.
    pub fn is_determined(&self) -> bool {
        self.expression.iter().all(|t| t.is_constant())
    }
}

impl Solution<Integer> {
    /// Get the rational value of a variable that does not depend on any free variable.
    pub fn value(&self) -> Option<Rational> {
        if !self.is_determined() {
            return None;
        }

        let num = self
            .constant()
            .cloned()
            .unwrap_or_else(Integer::zero)
            .to_multi_prec();
        Some(Rational::from((
            num,
            self.variable.coefficient.clone().to_multi_prec(),
        )))
    }
}

impl<E: Display + PartialEq<i64>> Display for Term<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() {
            write!(f, "{}", self.coefficient)
        } else if self.coefficient == 1 {
            write!(f, "x{}", self.variable)
        } else if self.coefficient == -1 {
            write!(f, "-x{}", self.variable)
        } else {
            write!(f, "{}*x{}", self.coefficient, self.variable)
        }
    }
}

impl<E: Display + PartialEq<i64>> Display for Solution<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} =", self.variable)?;
        for (i, t) in self.expression.iter().enumerate() {
            let t = t.to_string();
            if i == 0 {
                write!(f, " {}", t)?;
            } else if t.starts_with('-') {
                f.write_str(&t)?;
            } else {
                write!(f, "+{}", t)?;
            }
        }
        Ok(())
    }
}

/// The classification of the solutions of a system.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolutionSet<E> {
    /// The system has no solutions.
    Inconsistent,
    /// Every variable has exactly one value.
    Unique(Vec<Solution<E>>),
    /// The pivot variables depend on the listed free variables.
    Parametric {
        solutions: Vec<Solution<E>>,
        free_variables: Vec<u32>,
    },
}

impl<F: ExactDomain> AugmentedSystem<F> {
    /// Read the solutions from a system in reduced row-echelon form: one [Solution]
    /// per pivot row, expressing its pivot variable in the free variables.
    ///
    /// An empty list is returned when the system is inconsistent, but also when it
    /// has no equations with nonzero coefficients. Use [AugmentedSystem::solution_set]
    /// to distinguish the two. The system should be [solved](AugmentedSystem::solve) first.
    pub fn get_solutions(&self) -> Vec<Solution<F::Element>> {
        if self.state != ReductionState::ReducedRowEchelon {
            debug!(state = ?self.state, "extracting solutions from an unreduced system");
        }

        let field = &self.grid.field;
        let nvars = self.grid.ncols() - 1;

        let mut solutions = vec![];
        for (r, row) in self.grid.row_iter().enumerate() {
            let (coeffs, rhs) = row.split_at(nvars);
            let rhs = &rhs[0];

            let Some(p) = coeffs.iter().position(|e| !F::is_zero(e)) else {
                if !F::is_zero(rhs) {
                    debug!(row = r, "system is inconsistent");
                    return vec![];
                }

                continue;
            };

            let mut expression: SmallVec<[_; 4]> = coeffs
                .iter()
                .enumerate()
                .skip(p + 1)
                .filter(|(_, e)| !F::is_zero(e))
                .map(|(v, e)| Term {
                    coefficient: field.neg(e),
                    variable: v as u32 + 1,
                })
                .collect();

            if !F::is_zero(rhs) || expression.is_empty() {
                expression.push(Term::constant(rhs.clone()));
            }

            solutions.push(Solution {
                variable: Term {
                    coefficient: coeffs[p].clone(),
                    variable: p as u32 + 1,
                },
                expression,
            });
        }

        solutions
    }

    /// Classify the solutions of the system. A system that is not in reduced
    /// form is reduced on a copy first.
    pub fn solution_set(&self) -> SolutionSet<F::Element> {
        let system = self.reduced();
        let solutions = system.get_solutions();

        if solutions.is_empty() && !system.is_consistent() {
            return SolutionSet::Inconsistent;
        }

        let free_variables: Vec<u32> = (1..=system.num_variables() as u32)
            .filter(|v| solutions.iter().all(|s| s.variable.variable != *v))
            .collect();

        if free_variables.is_empty() {
            SolutionSet::Unique(solutions)
        } else {
            SolutionSet::Parametric {
                solutions,
                free_variables,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use rug::Rational;
    use smallvec::smallvec;

    use crate::{
        domains::integer::{Integer, IntegerRing, Z},
        linear_system::AugmentedSystem,
        matrix::Matrix,
    };

    use super::{Solution, SolutionSet, Term};

    fn solved(rows: &[&[i64]]) -> AugmentedSystem<IntegerRing> {
        let grid = Matrix::from_nested_vec(
            rows.iter()
                .map(|r| r.iter().map(|&x| Integer::from(x)).collect())
                .collect(),
            Z,
        )
        .unwrap();
        let mut s = AugmentedSystem::from_augmented(grid).unwrap();
        s.solve();
        s
    }

    fn sol(variable: (i64, u32), expression: &[(i64, u32)]) -> Solution<Integer> {
        Solution {
            variable: Term {
                coefficient: variable.0.into(),
                variable: variable.1,
            },
            expression: expression
                .iter()
                .map(|&(c, v)| Term {
                    coefficient: c.into(),
                    variable: v,
                })
                .collect(),
        }
    }

    #[test]
    fn worked_example() {
        let s = solved(&[
            &[-4, 3, -3, 5, 9],
            &[6, 0, -18, 6, -18],
            &[-8, 6, -6, 10, 18],
            &[1, -4, 17, -11, 1],
        ]);

        let r = s.get_solutions();
        assert_eq!(
            r,
            vec![
                sol((1, 1), &[(3, 3), (-1, 4), (-3, 0)]),
                sol((1, 2), &[(5, 3), (-3, 4), (-1, 0)]),
            ]
        );
        assert_eq!(r[0].to_string(), "x1 = 3*x3-x4-3");
        assert_eq!(
            s.solution_set(),
            SolutionSet::Parametric {
                solutions: r,
                free_variables: vec![3, 4]
            }
        );
    }

    #[test]
    fn underdetermined() {
        let s = solved(&[&[1, 1, 2]]);
        assert_eq!(s.get_solutions(), vec![sol((1, 1), &[(-1, 2), (2, 0)])]);

        let s = solved(&[&[1, 2, 3, 4], &[2, 4, 6, 8], &[1, 0, 1, 0]]);
        assert_eq!(
            s.get_solutions(),
            vec![
                sol((1, 1), &[(-1, 3)]),
                sol((1, 2), &[(-1, 3), (2, 0)])
            ]
        );

        let s = solved(&[&[3, 6, 9], &[1, 2, 3]]);
        assert_eq!(s.get_solutions(), vec![sol((1, 1), &[(-2, 2), (3, 0)])]);
    }

    #[test]
    fn free_leading_variable() {
        let s = solved(&[&[0, 0, 2, 4], &[0, 3, 0, 6], &[0, 0, 0, 0]]);
        let r = s.get_solutions();
        assert_eq!(
            r,
            vec![sol((1, 2), &[(2, 0)]), sol((1, 3), &[(2, 0)])]
        );
        assert_eq!(
            s.solution_set(),
            SolutionSet::Parametric {
                solutions: r,
                free_variables: vec![1]
            }
        );
    }

    #[test]
    fn unique() {
        let s = solved(&[&[2, 1, -1, 8], &[-3, -1, 2, -11], &[-2, 1, 2, -3]]);
        let r = s.get_solutions();
        assert_eq!(
            r,
            vec![
                sol((1, 1), &[(2, 0)]),
                sol((1, 2), &[(3, 0)]),
                sol((1, 3), &[(-1, 0)])
            ]
        );
        assert_eq!(r[2].to_string(), "x3 = -1");
        assert_eq!(s.solution_set(), SolutionSet::Unique(r));
    }

    #[test]
    fn rational_values() {
        let s = solved(&[&[2, 4, -6, 8], &[1, 3, 5, 7], &[0, 1, 0, 2]]);
        let r = s.get_solutions();
        assert_eq!(
            r,
            vec![
                sol((8, 1), &[(3, 0)]),
                sol((1, 2), &[(2, 0)]),
                sol((8, 3), &[(1, 0)])
            ]
        );
        assert_eq!(r[0].to_string(), "8*x1 = 3");
        assert_eq!(r[0].value(), Some(Rational::from((3, 8))));
        assert_eq!(r[1].value(), Some(Rational::from(2)));
        assert!(matches!(s.solution_set(), SolutionSet::Unique(_)));
    }

    #[test]
    fn zero_constant() {
        let s = solved(&[&[5, 0]]);
        let r = s.get_solutions();
        assert_eq!(r, vec![sol((1, 1), &[(0, 0)])]);
        assert_eq!(r[0].constant(), Some(&Integer::zero()));
        assert_eq!(r[0].value(), Some(Rational::new()));

        let s = solved(&[&[1, 2, 1, 0], &[2, 4, 2, 0]]);
        let r = s.get_solutions();
        assert_eq!(r, vec![sol((1, 1), &[(-2, 2), (-1, 3)])]);
        assert_eq!(r[0].constant(), None);
        assert_eq!(r[0].value(), None);
    }

    #[test]
    fn inconsistent() {
        let s = solved(&[&[1, 1, 2], &[1, 1, 3]]);
        assert!(s.get_solutions().is_empty());
        assert_eq!(s.solution_set(), SolutionSet::Inconsistent);

        let s = solved(&[&[1, 1, 1, 1], &[0, 0, 1, 1], &[0, 0, 0, 1], &[0, 0, 0, 2]]);
        assert!(s.get_solutions().is_empty());
        assert_eq!(s.solution_set(), SolutionSet::Inconsistent);
    }

    #[test]
    fn trivial_systems() {
        // no equations with nonzero coefficients is not the same as no solutions
        let s = solved(&[&[0, 0, 0], &[0, 0, 0]]);
        assert!(s.get_solutions().is_empty());
        assert_eq!(
            s.solution_set(),
            SolutionSet::Parametric {
                solutions: vec![],
                free_variables: vec![1, 2]
            }
        );

        let s = solved(&[&[0]]);
        assert_eq!(s.solution_set(), SolutionSet::Unique(vec![]));
    }

    #[test]
    fn classify_unreduced() {
        let grid = Matrix::from_linear(
            vec![2.into(), 2.into(), 4.into(), 1.into(), (-1).into(), 0.into()],
            2,
            3,
            Z,
        )
        .unwrap();
        let s = AugmentedSystem::from_augmented(grid).unwrap();

        assert_eq!(
            s.solution_set(),
            SolutionSet::Unique(vec![sol((1, 1), &[(1, 0)]), sol((1, 2), &[(1, 0)])])
        );
    }

    #[test]
    fn display() {
        let s: Solution<Integer> = Solution {
            variable: Term {
                coefficient: 2.into(),
                variable: 3,
            },
            expression: smallvec![
                Term {
                    coefficient: (-1).into(),
                    variable: 4
                },
                Term {
                    coefficient: 5.into(),
                    variable: 5
                },
                Term::constant(7.into())
            ],
        };
        assert_eq!(s.to_string(), "2*x3 = -x4+5*x5+7");
    }
}
