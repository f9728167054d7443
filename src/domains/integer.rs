use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};

use rug::{Complete, Integer as MultiPrecisionInteger};

use crate::utils;

use super::{EuclideanDomain, ExactDomain, Ring};

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision integer.
///
/// Values that fit in an `i64` are always stored as [Integer::Natural], so that
/// the derived equality and hashing are structural.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Natural(i64),
    Large(MultiPrecisionInteger),
}

macro_rules! from_with_cast {
    ($base: ty) => {
        impl From<$base> for Integer {
            #[inline]
            fn from(value: $base) -> Self {
                Integer::Natural(value as i64)
            }
        }

        impl PartialEq<$base> for Integer {
            #[inline]
            fn eq(&self, other: &$base) -> bool {
                match self {
                    Integer::Natural(n) => *n == *other as i64,
                    _ => false,
                }
            }
        }

        impl PartialEq<Integer> for $base {
            #[inline]
            fn eq(&self, other: &Integer) -> bool {
                other == self
            }
        }

        impl PartialOrd<$base> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$base) -> Option<Ordering> {
                match self {
                    Integer::Natural(n) => n.partial_cmp(&(*other as i64)),
                    x => {
                        if x.is_negative() {
                            Some(Ordering::Less)
                        } else {
                            Some(Ordering::Greater)
                        }
                    }
                }
            }
        }

        impl PartialOrd<Integer> for $base {
            #[inline]
            fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
                other.partial_cmp(self).map(|x| x.reverse())
            }
        }
    };
}

from_with_cast!(i8);
from_with_cast!(i16);
from_with_cast!(i32);
from_with_cast!(i64);
from_with_cast!(u8);
from_with_cast!(u16);
from_with_cast!(u32);

macro_rules! cmp_with_conv {
    ($base: ty) => {
        impl PartialEq<$base> for Integer {
            #[inline]
            fn eq(&self, other: &$base) -> bool {
                self == &Integer::from(*other)
            }
        }

        impl PartialOrd<$base> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$base) -> Option<Ordering> {
                self.partial_cmp(&Integer::from(*other))
            }
        }

        impl PartialEq<Integer> for $base {
            #[inline]
            fn eq(&self, other: &Integer) -> bool {
                other == self
            }
        }

        impl PartialOrd<Integer> for $base {
            #[inline]
            fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
                other.partial_cmp(self).map(|x| x.reverse())
            }
        }
    };
}

impl From<i128> for Integer {
    #[inline]
    fn from(value: i128) -> Self {
        Integer::from_double(value)
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Natural(value as i64)
        } else {
            Integer::Large(value.into())
        }
    }
}

impl From<usize> for Integer {
    #[inline]
    fn from(value: usize) -> Self {
        Integer::from(value as u64)
    }
}

impl From<MultiPrecisionInteger> for Integer {
    /// Convert from a multi-precision integer to an Integer, potentially
    /// downcasting the number.
    #[inline]
    fn from(n: MultiPrecisionInteger) -> Self {
        if let Some(n) = n.to_i64() {
            Integer::Natural(n)
        } else {
            Integer::Large(n)
        }
    }
}

cmp_with_conv!(u64);
cmp_with_conv!(usize);
cmp_with_conv!(i128);

impl FromStr for Integer {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() <= 20 {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Integer::Natural(n));
            }
        }

        if let Ok(n) = s.parse::<MultiPrecisionInteger>() {
            Ok(Integer::from(n))
        } else {
            Err("Could not parse integer")
        }
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural(n) => std::fmt::Display::fmt(n, f),
            Self::Large(n) => std::fmt::Display::fmt(n, f),
        }
    }
}

impl Integer {
    pub fn new(num: i64) -> Integer {
        Integer::Natural(num)
    }

    #[inline]
    fn simplify(&mut self) -> &mut Self {
        if let Integer::Large(l) = self {
            if let Some(n) = l.to_i64() {
                *self = Integer::Natural(n);
            }
        }
        self
    }

    /// Create an integer from an `i128`, promoting to a multi-precision
    /// integer when it does not fit in an `i64`.
    #[inline]
    pub fn from_double(n: i128) -> Integer {
        if n >= i64::MIN as i128 && n <= i64::MAX as i128 {
            Integer::Natural(n as i64)
        } else {
            Integer::Large(MultiPrecisionInteger::from(n))
        }
    }

    pub fn to_multi_prec(self) -> MultiPrecisionInteger {
        match self {
            Integer::Natural(n) => n.into(),
            Integer::Large(l) => l,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 0,
            _ => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 1,
            _ => false,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Natural(n) => *n < 0,
            Integer::Large(r) => r.cmp0() == Ordering::Less,
        }
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer::Natural(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Natural(1)
    }

    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Integer::Natural(n) => Some(*n),
            _ => None,
        }
    }

    pub fn abs(&self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if *n == i64::MIN {
                    Integer::Large(MultiPrecisionInteger::from(*n).abs())
                } else {
                    Integer::Natural(n.abs())
                }
            }
            Integer::Large(n) => Integer::Large(n.clone().abs()),
        }
    }

    /// Divide `self` by `b`, rounding the quotient towards zero.
    /// The remainder has the sign of `self`.
    pub fn quot_rem(&self, b: &Integer) -> (Integer, Integer) {
        (self / b, self % b)
    }

    /// Compute the non-negative greatest common divisor.
    pub fn gcd(&self, b: &Integer) -> Integer {
        match (self, b) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                Integer::from(utils::gcd_signed(*n1, *n2))
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => {
                let r1 = MultiPrecisionInteger::from(*n1);
                Integer::from(r1.gcd(r2))
            }
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from(r1.clone().gcd(r2)),
        }
    }

    /// Compute the least common multiple of two integers.
    pub fn lcm(&self, b: &Integer) -> Integer {
        let g = self.gcd(b);
        if g.is_zero() {
            Integer::zero()
        } else {
            ((self / &g) * b).abs()
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Natural(n) => n.fmt(f),
            Integer::Large(r) => r.fmt(f),
        }
    }
}

impl Display for IntegerRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Z")
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Natural(n1), Integer::Natural(n2)) => n1.cmp(n2),
            // a large integer is always outside of the range of a natural
            (Integer::Natural(_), Integer::Large(n2)) => {
                if n2.cmp0() == Ordering::Less {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Integer::Large(n1), Integer::Natural(_)) => {
                if n1.cmp0() == Ordering::Less {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Integer::Large(n1), Integer::Large(n2)) => n1.cmp(n2),
        }
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline(always)]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        if let Integer::Large(l) = a {
            // prevent the creation of a GMP integer b * c
            if let (Integer::Large(b1), Integer::Large(c1)) = (b, c) {
                l.add_assign(b1 * c1);
                a.simplify();
                return;
            }
        }

        *a += b * c;
    }

    #[inline(always)]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        if let Integer::Large(l) = a {
            if let (Integer::Large(b1), Integer::Large(c1)) = (b, c) {
                l.sub_assign(b1 * c1);
                a.simplify();
                return;
            }
        }

        *a -= b * c;
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Integer::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Integer::one()
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if b.is_zero() {
            return None;
        }

        let (q, r) = a.quot_rem(b);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a % b
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        a.quot_rem(b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd(b)
    }
}

impl ExactDomain for IntegerRing {
    #[inline]
    fn is_negative(&self, a: &Self::Element) -> bool {
        a.is_negative()
    }

    #[inline]
    fn abs(&self, a: &Self::Element) -> Self::Element {
        a.abs()
    }

    #[inline]
    fn div_exact(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        debug_assert!((a % b).is_zero(), "{} does not divide {}", b, a);
        a / b
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn add(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_add(*n2) {
                    Integer::Natural(num)
                } else {
                    Integer::from_double(*n1 as i128 + *n2 as i128)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => Integer::from(r2.clone() + *n1),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 + r2).complete()),
        }
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn sub(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_sub(*n2) {
                    Integer::Natural(num)
                } else {
                    Integer::from_double(*n1 as i128 - *n2 as i128)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2)) => {
                Integer::from(MultiPrecisionInteger::from(*n1) - r2)
            }
            (Integer::Large(r1), Integer::Natural(n2)) => Integer::from(r1.clone() - *n2),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 - r2).complete()),
        }
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn mul(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_mul(*n2) {
                    Integer::Natural(num)
                } else {
                    // the product of two i64 always fits in an i128
                    Integer::from_double(*n1 as i128 * *n2 as i128)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => Integer::from(r2.clone() * *n1),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 * r2).complete()),
        }
    }
}

impl<'a, 'b> Div<&'b Integer> for &'a Integer {
    type Output = Integer;

    /// Divide two integers, rounding towards zero.
    #[inline(always)]
    fn div(self, rhs: &'b Integer) -> Integer {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_div(*n2) {
                    Integer::Natural(num)
                } else {
                    // i64::MIN / -1
                    Integer::from_double(-(*n1 as i128))
                }
            }
            (Integer::Natural(n1), Integer::Large(r2)) => {
                Integer::from(MultiPrecisionInteger::from(*n1) / r2)
            }
            (Integer::Large(r1), Integer::Natural(n2)) => Integer::from(r1.clone() / *n2),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 / r2).complete()),
        }
    }
}

impl<'a, 'b> Rem<&'b Integer> for &'a Integer {
    type Output = Integer;

    /// The remainder of the division rounding towards zero. It has the sign of `self`.
    fn rem(self, rhs: &'b Integer) -> Integer {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                // only fails for i64::MIN % -1
                Integer::Natural(n1.checked_rem(*n2).unwrap_or(0))
            }
            (Integer::Natural(n1), Integer::Large(r2)) => {
                Integer::from(MultiPrecisionInteger::from(*n1) % r2)
            }
            (Integer::Large(r1), Integer::Natural(n2)) => Integer::from(r1.clone() % *n2),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 % r2).complete()),
        }
    }
}

macro_rules! forward_bin_op {
    ($op: ident, $fn: ident) => {
        impl $op<Integer> for Integer {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: Integer) -> Integer {
                (&self).$fn(&rhs)
            }
        }

        impl<'a> $op<&'a Integer> for Integer {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: &'a Integer) -> Integer {
                (&self).$fn(rhs)
            }
        }

        impl<'a> $op<Integer> for &'a Integer {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: Integer) -> Integer {
                self.$fn(&rhs)
            }
        }
    };
}

forward_bin_op!(Add, add);
forward_bin_op!(Sub, sub);
forward_bin_op!(Mul, mul);
forward_bin_op!(Div, div);
forward_bin_op!(Rem, rem);

macro_rules! bin_op_int {
    ($base: ty) => {
        bin_op_int!($base, Add, add);
        bin_op_int!($base, Sub, sub);
        bin_op_int!($base, Mul, mul);
        bin_op_int!($base, Div, div);
        bin_op_int!($base, Rem, rem);

        impl AddAssign<$base> for Integer {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $base) {
                *self += Integer::from(rhs);
            }
        }

        impl SubAssign<$base> for Integer {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $base) {
                *self -= Integer::from(rhs);
            }
        }

        impl MulAssign<$base> for Integer {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $base) {
                *self *= Integer::from(rhs);
            }
        }

        impl DivAssign<$base> for Integer {
            #[inline(always)]
            fn div_assign(&mut self, rhs: $base) {
                *self /= Integer::from(rhs);
            }
        }
    };
    ($base: ty, $op: ident, $fn: ident) => {
        impl $op<$base> for Integer {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: $base) -> Integer {
                (&self).$fn(&Integer::from(rhs))
            }
        }

        impl<'a> $op<$base> for &'a Integer {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: $base) -> Integer {
                self.$fn(&Integer::from(rhs))
            }
        }

        impl $op<Integer> for $base {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: Integer) -> Integer {
                (&Integer::from(self)).$fn(&rhs)
            }
        }

        impl<'a> $op<&'a Integer> for $base {
            type Output = Integer;

            #[inline(always)]
            fn $fn(self, rhs: &'a Integer) -> Integer {
                (&Integer::from(self)).$fn(rhs)
            }
        }
    };
}

bin_op_int!(i32);
bin_op_int!(i64);
bin_op_int!(u32);
bin_op_int!(u64);
bin_op_int!(usize);

impl<'a> AddAssign<&'a Integer> for Integer {
    #[inline(always)]
    fn add_assign(&mut self, rhs: &'a Integer) {
        if let Integer::Large(l) = self {
            match rhs {
                Integer::Natural(r) => l.add_assign(*r),
                Integer::Large(r) => l.add_assign(r),
            }

            self.simplify();
        } else {
            *self = &*self + rhs;
        }
    }
}

impl<'a> SubAssign<&'a Integer> for Integer {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: &'a Integer) {
        if let Integer::Large(l) = self {
            match rhs {
                Integer::Natural(r) => l.sub_assign(*r),
                Integer::Large(r) => l.sub_assign(r),
            }

            self.simplify();
        } else {
            *self = &*self - rhs;
        }
    }
}

impl<'a> MulAssign<&'a Integer> for Integer {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: &'a Integer) {
        if let Integer::Large(l) = self {
            match rhs {
                Integer::Natural(r) => l.mul_assign(*r),
                Integer::Large(r) => l.mul_assign(r),
            }

            self.simplify();
        } else {
            *self = &*self * rhs;
        }
    }
}

impl<'a> DivAssign<&'a Integer> for Integer {
    #[inline(always)]
    fn div_assign(&mut self, rhs: &'a Integer) {
        *self = &*self / rhs;
    }
}

macro_rules! forward_assign_op {
    ($op: ident, $fn: ident) => {
        impl $op<Integer> for Integer {
            #[inline(always)]
            fn $fn(&mut self, rhs: Integer) {
                self.$fn(&rhs);
            }
        }
    };
}

forward_assign_op!(AddAssign, add_assign);
forward_assign_op!(SubAssign, sub_assign);
forward_assign_op!(MulAssign, mul_assign);
forward_assign_op!(DivAssign, div_assign);

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Integer::Natural(n) => {
                if let Some(neg) = n.checked_neg() {
                    Integer::Natural(neg)
                } else {
                    Integer::Large(MultiPrecisionInteger::from(*n).neg())
                }
            }
            Integer::Large(r) => Integer::from(r.clone().neg()),
        }
    }
}

#[cfg(test)]
mod test {
    use std::ops::{Add, Div, Mul, Rem, Sub};

    use super::{Integer, Z};
    use crate::domains::{EuclideanDomain, ExactDomain, Ring};

    #[test]
    fn binary_ops() {
        let a = Integer::from(5);
        let b: Integer = 7.into();

        assert_eq!(a < 5, false);
        assert_eq!(5 > a, false);
        assert_eq!(a < Integer::from(-891273892173892178922i128), false);

        let c = 2u32;

        assert_eq!(c + b.clone(), 9);
        assert_eq!(c + &b, 9);
        assert_eq!(c * b.clone(), 14);
        assert_eq!(&b * c, 14);
        assert_eq!(b.clone() / c, 3);
        assert_eq!(&b % c, 1);

        macro_rules! try_variants {
            ($a: expr, $b: expr, $res: expr, $op: tt) => {
                assert_eq!($a.clone().$op(&$b), $res);
                assert_eq!($a.clone().$op($b.clone()), $res);
                assert_eq!((&$a).$op($b.clone()), $res);
                assert_eq!((&$a).$op(&$b), $res);
            };
        }

        try_variants!(a, b, 12, add);
        try_variants!(a, b, -2, sub);
        try_variants!(a, b, 35, mul);
        try_variants!(b, a, 1, div);
        try_variants!(b, a, 2, rem);
    }

    #[test]
    fn truncating_division() {
        let a = Integer::from(-7);
        let b = Integer::from(2);
        assert_eq!(&a / &b, -3);
        assert_eq!(&a % &b, -1);
        assert_eq!(Integer::from(7) % Integer::from(-2), 1);

        let large: Integer = "-100000000000000000000000000001".parse().unwrap();
        assert_eq!(&large % &b, -1);
        assert_eq!(
            &large / Integer::from(-10),
            "10000000000000000000000000000".parse::<Integer>().unwrap()
        );
    }

    #[test]
    fn promotion() {
        let max = Integer::from(i64::MAX);
        let over = &max + 1;
        assert!(matches!(over, Integer::Large(_)));
        assert!(over > max);
        assert_eq!(&over - 1, max);
        assert!(matches!(&over - 1, Integer::Natural(_)));

        let min = Integer::from(i64::MIN);
        assert!(matches!(-&min, Integer::Large(_)));
        assert_eq!(-(-&min), min);
        assert_eq!(&min / -1, -&min);
        assert_eq!(&min % -1, 0);
        assert_eq!(min.abs(), over);

        let sq = &max * &max;
        assert_eq!(sq.to_string(), "85070591730234615847396907784232501249");
        assert_eq!(&sq / &max, max);

        let mut acc = Integer::from(1);
        for _ in 0..70 {
            acc *= 2;
        }
        assert_eq!(acc.to_string(), "1180591620717411303424");
        acc /= Integer::from(1u64 << 10);
        assert_eq!(acc, Integer::from(1u64 << 60));
        assert!(matches!(acc, Integer::Natural(_)));
    }

    #[test]
    fn ordering() {
        let big: Integer = "1000000000000000000000".parse().unwrap();
        let neg_big = -&big;
        let mut v = vec![big.clone(), 3.into(), neg_big.clone(), (-3).into(), 0.into()];
        v.sort();
        assert_eq!(v, vec![neg_big, (-3).into(), 0.into(), 3.into(), big]);
    }

    #[test]
    fn gcd() {
        assert_eq!(Integer::from(12).gcd(&Integer::from(-18)), 6);
        assert_eq!(Integer::from(0).gcd(&Integer::from(-5)), 5);
        assert_eq!(Integer::from(i64::MIN).gcd(&Integer::zero()), Integer::from(1u64 << 63));

        let a: Integer = "123456789012345678901234567890".parse().unwrap();
        let b = &a * 6;
        assert_eq!(a.gcd(&b), a);
        assert_eq!(Integer::from(-4).gcd(&b), 4);
        assert_eq!(Integer::from(4).lcm(&Integer::from(-6)), 12);
    }

    #[test]
    fn ring() {
        let mut a = Integer::from(3);
        Z.add_mul_assign(&mut a, &4.into(), &5.into());
        assert_eq!(a, 23);
        Z.sub_mul_assign(&mut a, &i64::MAX.into(), &2.into());
        assert_eq!(a, Integer::from(23i128 - 2 * i64::MAX as i128));
        Z.add_mul_assign(&mut a, &i64::MAX.into(), &2.into());
        assert_eq!(a, 23);

        assert_eq!(Z.try_div(&12.into(), &4.into()), Some(3.into()));
        assert_eq!(Z.try_div(&12.into(), &5.into()), None);
        assert_eq!(Z.try_div(&12.into(), &0.into()), None);
        assert_eq!(Z.quot_rem(&(-13).into(), &4.into()), ((-3).into(), (-1).into()));

        assert!(Z.is_negative(&(-1).into()));
        assert_eq!(Z.abs(&(-9).into()), 9);
        assert_eq!(Z.div_exact(&(-27).into(), &9.into()), -3);
    }

    #[test]
    #[should_panic]
    fn divide_by_zero() {
        let _ = Integer::from(1) / Integer::zero();
    }
}
