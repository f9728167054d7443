//! Defines the algebraic traits the solver is generic over.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example, the ring of integers [Z](type@integer::Z) has elements of type [Integer](integer::Integer).
//!
//! The ring elements do not need to implement operations such as addition or multiplication,
//! but rather the ring itself does. The matrix and the linear system are generic over the ring type.
//!
//! An extension of the ring trait is the [`EuclideanDomain`] trait, which adds the ability to compute remainders, quotients, and gcds.
//! The [`ExactDomain`] trait adds the ordering and exact division needed by fraction-free elimination.
pub mod integer;

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A ring is a set with two binary operations, addition and multiplication.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// For example, the ring of integers [Z](type@integer::Z) has elements of type [Integer](integer::Integer).
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of the ring of integers [Z](type@integer::Z), `Z::Element`, are [Integer](integer::Integer).
    type Element: Clone + PartialEq + Eq + Hash + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Return the result of dividing `a` by `b`, if possible and if the result is unique.
    /// For example, in [Z](type@integer::Z), `4/2` is possible but `3/2` is not.
    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element>;
}

/// A Euclidean domain is a ring that supports division with remainder, quotients, and gcds.
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A Euclidean domain with a total order that is compatible with its arithmetic,
/// such as the integers.
///
/// This is the capability needed by fraction-free Gaussian elimination: rows are scaled
/// by cross-multiplication, divided by exact gcds, and given a canonical sign.
/// Floating-point numbers deliberately do not implement this trait.
pub trait ExactDomain: EuclideanDomain {
    fn is_negative(&self, a: &Self::Element) -> bool;
    fn abs(&self, a: &Self::Element) -> Self::Element;
    /// Divide `a` by `b`, where `b` is known to divide `a`.
    fn div_exact(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}
