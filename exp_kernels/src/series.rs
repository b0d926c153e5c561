//! Truncated Maclaurin series for `exp(x)` on small residuals.
//!
//! The degree is a const generic, so every loop below has a compile-time trip
//! count and unrolls completely.

/// `n!` for small `n`.
pub const fn factorial(n: u32) -> u64 {
    let mut result = 1u64;
    let mut i = 2;
    while i <= n {
        result *= i as u64;
        i += 1;
    }
    result
}

/// `1 / n!` rounded to `f32`.
pub const fn inverse_factorial(n: u32) -> f32 {
    1.0 / factorial(n) as f32
}

/// Degree `N` Taylor polynomial of `exp(x)` evaluated with Horner's scheme.
///
/// Accumulates in `f64` and rounds once at the end.
#[inline(always)]
pub fn horner_exp<const N: u32>(x: f32) -> f32 {
    let x = x as f64;
    let mut acc = 0.0f64;
    let mut n = N;
    while n > 0 {
        acc = (acc + inverse_factorial(n) as f64) * x;
        n -= 1;
    }
    (acc + 1.0) as f32
}

/// Degree `N` Taylor polynomial of `exp(x)` written as an explicit sum of
/// powers, `1 + x/1! + x²/2! + ... + x^N/N!`.
///
/// The powers do not depend on the running sum, so the multiplications can be
/// issued in parallel instead of forming one long dependency chain like
/// [`horner_exp`].
#[inline(always)]
pub fn power_sum_exp<const N: u32>(x: f32) -> f32 {
    let mut sum = 1.0f32;
    let mut power = 1.0f32;
    let mut k = 1;
    while k <= N {
        power *= x;
        sum = power * inverse_factorial(k) + sum;
        k += 1;
    }
    sum
}
