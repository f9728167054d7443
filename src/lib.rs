//! Linsys solves systems of linear equations with integer coefficients exactly.
//!
//! The system is brought into a reduced row-echelon form with fraction-free Gaussian
//! elimination, so that all intermediate values stay integers. The solutions are then read off
//! as a parametric description: every pivot variable is expressed as a linear combination of the
//! free variables plus a constant.
//!
//! For example:
//!
//! ```
//! use linsys::{
//!     domains::integer::Z,
//!     linear_system::{AugmentedSystem, SolutionSet},
//!     matrix::Matrix,
//! };
//!
//! // 2x + y = 5, x - y = 1
//! let a = Matrix::from_linear(vec![2.into(), 1.into(), 1.into(), (-1).into()], 2, 2, Z).unwrap();
//! let b = Matrix::new_vec(vec![5.into(), 1.into()], Z);
//!
//! let mut system = AugmentedSystem::new(&a, &b).unwrap();
//! system.solve();
//!
//! println!("{}", system);
//! for s in system.get_solutions() {
//!     println!("{}", s);
//! }
//!
//! assert!(matches!(system.solution_set(), SolutionSet::Unique(_)));
//! ```
//!
//! Diagnostics are emitted through [tracing](https://docs.rs/tracing); install a subscriber to see them.

pub mod domains;
pub mod linear_system;
pub mod matrix;
pub mod utils;
