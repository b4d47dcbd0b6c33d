//! Primality check
//!
//! Standalone numeric helper, independent of the flashcard types.

/// Smallest magnitude at which every `f64` is an even integer (2^53)
const F64_EVEN_THRESHOLD: f64 = 9_007_199_254_740_992.0;

/// Deterministic trial-division primality test.
///
/// Candidates are tried as `6k ± 1` up to the exact integer square root, so
/// the bound never suffers floating-point rounding near `u64::MAX`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let limit = n.isqrt();
    let mut divisor = 5u64;
    while divisor <= limit {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// Primality test for an arbitrary double.
///
/// Returns false for NaN, infinities, non-integral values and anything
/// `<= 1`. Every double at or above 2^53 is an even integer, so those
/// (including `f64::MAX`) are rejected without any division.
pub fn is_prime_f64(value: f64) -> bool {
    if !value.is_finite() || value.fract() != 0.0 || value <= 1.0 {
        return false;
    }
    if value >= F64_EVEN_THRESHOLD {
        return false;
    }
    // Integral and within (1, 2^53), so the cast is exact.
    is_prime(value as u64)
}
