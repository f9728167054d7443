/// Compute the non-negative gcd of two signed integers with Euclid's algorithm.
///
/// The result is returned as unsigned, since `gcd(i64::MIN, 0) = 2^63` does not fit in an `i64`.
pub fn gcd_signed(mut a: i64, mut b: i64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}
