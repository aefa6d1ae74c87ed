//! Functions in the integer domain
//!
//! Operands must implement [`Integral`], the check happens while compiling. `bool`
//! is not integral:
//!
//! ```compile_fail
//! use chronal::numeric::gcd;
//!
//! let _ = gcd(2_i32, true);
//! ```
//!
//! Neither are the floating point numbers:
//!
//! ```compile_fail
//! use chronal::numeric::lcm;
//!
//! let _ = lcm(2.0_f64, 4_i32);
//! ```

use num_period::{CommonRep, Integral};

/// Common representation of the operands, it must be integral too
type Common<M, N> = <M as CommonRep<N>>::Output;

#[inline]
fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Greatest common divisor of `|m|` and `|n|`, computed in the common
/// representation. `gcd(0, 0)` is `0`
///
/// The result wraps if it can not be represented, which only happens when both
/// operands are the minimum of a signed type
#[inline]
pub fn gcd<M, N>(m: M, n: N) -> Common<M, N>
where
    M: Integral + CommonRep<N>,
    N: Integral,
    Common<M, N>: Integral,
{
    let g = gcd_u128(m.unsigned_abs_u128(), n.unsigned_abs_u128());
    <Common<M, N> as Integral>::from_u128_wrapping(g)
}

/// Least common multiple of `|m|` and `|n|`, computed in the common
/// representation. `lcm(m, 0)` is `0`. The result wraps if it can not be
/// represented, see [`checked_lcm`]
#[inline]
pub fn lcm<M, N>(m: M, n: N) -> Common<M, N>
where
    M: Integral + CommonRep<N>,
    N: Integral,
    Common<M, N>: Integral,
{
    let (m, n) = (m.unsigned_abs_u128(), n.unsigned_abs_u128());
    if m == 0 || n == 0 {
        return <Common<M, N> as Integral>::from_u128_wrapping(0);
    }
    <Common<M, N> as Integral>::from_u128_wrapping((m / gcd_u128(m, n)).wrapping_mul(n))
}

/// Least common multiple of `|m|` and `|n|`, returns `None` if it can not be
/// represented in the common representation
#[inline]
pub fn checked_lcm<M, N>(m: M, n: N) -> Option<Common<M, N>>
where
    M: Integral + CommonRep<N>,
    N: Integral,
    Common<M, N>: Integral,
{
    let (m, n) = (m.unsigned_abs_u128(), n.unsigned_abs_u128());
    if m == 0 || n == 0 {
        return Some(<Common<M, N> as Integral>::from_u128_wrapping(0));
    }
    (m / gcd_u128(m, n))
        .checked_mul(n)
        .and_then(<Common<M, N> as Integral>::checked_from_u128)
}
