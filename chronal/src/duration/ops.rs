//! Arithmetic and comparison operators of [`Duration`]
//!
//! Binary operators between two durations compute in [`CommonDuration`]. Scalar
//! operators compute in the common representation of the tick count and the
//! scalar, the period is kept.
//!
//! Remainder only exists in the integer domain:
//!
//! ```compile_fail
//! use chronal::duration::Duration;
//!
//! let _ = Duration::<f64>::new(15.0) % 5_i32;
//! ```
//!
//! ```compile_fail
//! use chronal::duration::Duration;
//!
//! let _ = Duration::<i32>::new(15) % 5.0_f64;
//! ```
//!
//! Compound assignment keeps the type of the left operand, so the right operand
//! must be implicitly convertible into it:
//!
//! ```compile_fail
//! use chronal::duration::{milliseconds, seconds};
//!
//! let mut s = seconds(1);
//! s += milliseconds(1);
//! ```
//!
//! [`CommonDuration`]: super::CommonDuration

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_period::{CommonPeriod, CommonRep, Integral, Period, Representation};
use snafu::ResultExt;

use super::{Duration, cast_rep, common_counts};
use crate::error::{ArithmeticSnafu, Result};

type Cr<R1, R2> = <R1 as CommonRep<R2>>::Output;
type Cp<P1, P2> = <P1 as CommonPeriod<P2>>::Output;

impl<R, P> Neg for Duration<R, P>
where
    R: Representation + Neg<Output = R>,
    P: Period,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

macro_rules! impl_duration_binary {
    ($($trait:ident, $method:ident, $ticks:ident);+) => {
        $(
            impl<R1, P1, R2, P2> $trait<Duration<R2, P2>> for Duration<R1, P1>
            where
                R1: CommonRep<R2>,
                R2: Representation,
                P1: CommonPeriod<P2>,
                P2: Period,
            {
                type Output = Duration<Cr<R1, R2>, Cp<P1, P2>>;

                #[inline]
                fn $method(self, rhs: Duration<R2, P2>) -> Self::Output {
                    let (lhs, rhs) = common_counts(self, rhs);
                    Duration::new(lhs.$ticks(rhs))
                }
            }
        )+
    };
}

impl_duration_binary!(Add, add, add_ticks; Sub, sub, sub_ticks);

impl<R1, P1, R2, P2> Div<Duration<R2, P2>> for Duration<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
{
    type Output = Cr<R1, R2>;

    /// Ratio of two durations, the result has no unit
    #[inline]
    fn div(self, rhs: Duration<R2, P2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        lhs / rhs
    }
}

impl<R1, P1, R2, P2> Rem<Duration<R2, P2>> for Duration<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
    Cr<R1, R2>: Integral,
{
    type Output = Duration<Cr<R1, R2>, Cp<P1, P2>>;

    #[inline]
    fn rem(self, rhs: Duration<R2, P2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        Duration::new(lhs % rhs)
    }
}

macro_rules! impl_scalar_ops {
    ($({$variant:ident, $ty:ty}),+) => {
        $(
            impl<R, P> Mul<$ty> for Duration<R, P>
            where
                R: CommonRep<$ty>,
                P: Period,
            {
                type Output = Duration<Cr<R, $ty>, P>;

                #[inline]
                fn mul(self, rhs: $ty) -> Self::Output {
                    let count = cast_rep::<R, Cr<R, $ty>>(self.count);
                    Duration::new(count.mul_ticks(cast_rep::<$ty, Cr<R, $ty>>(rhs)))
                }
            }

            impl<R, P> Mul<Duration<R, P>> for $ty
            where
                R: Representation,
                $ty: CommonRep<R>,
                P: Period,
            {
                type Output = Duration<Cr<$ty, R>, P>;

                #[inline]
                fn mul(self, rhs: Duration<R, P>) -> Self::Output {
                    let count = cast_rep::<R, Cr<$ty, R>>(rhs.count);
                    Duration::new(cast_rep::<$ty, Cr<$ty, R>>(self).mul_ticks(count))
                }
            }

            impl<R, P> Div<$ty> for Duration<R, P>
            where
                R: CommonRep<$ty>,
                P: Period,
            {
                type Output = Duration<Cr<R, $ty>, P>;

                #[inline]
                fn div(self, rhs: $ty) -> Self::Output {
                    let count = cast_rep::<R, Cr<R, $ty>>(self.count);
                    Duration::new(count / cast_rep::<$ty, Cr<R, $ty>>(rhs))
                }
            }

            impl<R, P> Rem<$ty> for Duration<R, P>
            where
                R: CommonRep<$ty>,
                P: Period,
                Cr<R, $ty>: Integral,
            {
                type Output = Duration<Cr<R, $ty>, P>;

                #[inline]
                fn rem(self, rhs: $ty) -> Self::Output {
                    let count = cast_rep::<R, Cr<R, $ty>>(self.count);
                    Duration::new(count % cast_rep::<$ty, Cr<R, $ty>>(rhs))
                }
            }
        )+
    };
}

num_period::for_all_representations!(impl_scalar_ops);

impl<R, P, R2, P2> AddAssign<Duration<R2, P2>> for Duration<R, P>
where
    R: Representation,
    P: Period,
    R2: Representation,
    P2: Period,
{
    #[inline]
    fn add_assign(&mut self, rhs: Duration<R2, P2>) {
        self.count = self.count.add_ticks(Self::from_duration(rhs).count);
    }
}

impl<R, P, R2, P2> SubAssign<Duration<R2, P2>> for Duration<R, P>
where
    R: Representation,
    P: Period,
    R2: Representation,
    P2: Period,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Duration<R2, P2>) {
        self.count = self.count.sub_ticks(Self::from_duration(rhs).count);
    }
}

impl<R: Representation, P: Period> MulAssign<R> for Duration<R, P> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.count = self.count.mul_ticks(rhs);
    }
}

impl<R: Representation, P: Period> DivAssign<R> for Duration<R, P> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.count = self.count / rhs;
    }
}

impl<R: Integral, P: Period> RemAssign<R> for Duration<R, P> {
    #[inline]
    fn rem_assign(&mut self, rhs: R) {
        self.count = self.count % rhs;
    }
}

impl<R1, P1, R2, P2> PartialEq<Duration<R2, P2>> for Duration<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
{
    #[inline]
    fn eq(&self, other: &Duration<R2, P2>) -> bool {
        let (lhs, rhs) = common_counts(*self, *other);
        lhs == rhs
    }
}

impl<R1, P1, R2, P2> PartialOrd<Duration<R2, P2>> for Duration<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
{
    #[inline]
    fn partial_cmp(&self, other: &Duration<R2, P2>) -> Option<Ordering> {
        let (lhs, rhs) = common_counts(*self, *other);
        lhs.partial_cmp(&rhs)
    }
}

impl<R: Integral, P: Period> Eq for Duration<R, P> {}

impl<R: Integral, P: Period> Ord for Duration<R, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

/// Checked forms of the arithmetic operators. They report the overflow as an error
/// regardless of the `overflow_checks` feature
impl<R1: Representation, P1: Period> Duration<R1, P1> {
    /// `self + rhs` in the common duration
    pub fn checked_add<R2, P2>(
        self,
        rhs: Duration<R2, P2>,
    ) -> Result<Duration<Cr<R1, R2>, Cp<P1, P2>>>
    where
        R1: CommonRep<R2>,
        R2: Representation,
        P1: CommonPeriod<P2>,
        P2: Period,
    {
        let (lhs_count, rhs_count) = common_counts(self, rhs);
        let count = lhs_count
            .checked_add_ticks(rhs_count)
            .with_context(|_| ArithmeticSnafu {
                lhs: self.to_string(),
                op: '+',
                rhs: rhs.to_string(),
            })?;
        Ok(Duration::new(count))
    }

    /// `self - rhs` in the common duration
    pub fn checked_sub<R2, P2>(
        self,
        rhs: Duration<R2, P2>,
    ) -> Result<Duration<Cr<R1, R2>, Cp<P1, P2>>>
    where
        R1: CommonRep<R2>,
        R2: Representation,
        P1: CommonPeriod<P2>,
        P2: Period,
    {
        let (lhs_count, rhs_count) = common_counts(self, rhs);
        let count = lhs_count
            .checked_sub_ticks(rhs_count)
            .with_context(|_| ArithmeticSnafu {
                lhs: self.to_string(),
                op: '-',
                rhs: rhs.to_string(),
            })?;
        Ok(Duration::new(count))
    }

    /// `self * rhs`, the representation is kept
    pub fn checked_mul(self, rhs: R1) -> Result<Self> {
        let count = self
            .count
            .checked_mul_ticks(rhs)
            .with_context(|_| ArithmeticSnafu {
                lhs: self.to_string(),
                op: '*',
                rhs: rhs.to_string(),
            })?;
        Ok(Self::new(count))
    }
}

impl<R: Representation, P: Period> std::iter::Sum for Duration<R, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| Self::new(acc.count.add_ticks(d.count)))
    }
}

#[cfg(test)]
mod tests {
    use num_period::Ratio;

    use super::super::*;

    num_period::define_period!(
        /// One frame of a 30 fps video
        Frame = 1 / 30
    );
    num_period::impl_common_period!(Frame => Milli, Unit);

    #[test]
    fn test_add_sub_in_common_type() {
        let d = seconds(1) + milliseconds(500);
        let _: CommonOf<Seconds, Milliseconds> = d;
        let _: Milliseconds = d;
        assert_eq!(d.count(), 1500);

        let d = Duration::<i32, MinutePeriod>::new(2) - Duration::<u8>::new(30);
        let _: Duration<i32, Unit> = d;
        assert_eq!(d.count(), 90);

        let d = Duration::<f32, Milli>::new(0.5) + Duration::<i64, Micro>::new(250);
        let _: Duration<f32, Micro> = d;
        assert_eq!(d.count(), 750.0);

        let d = hours(1) + deciseconds(5);
        let _: Deciseconds = d;
        assert_eq!(d.count(), 36_005);
    }

    #[test]
    fn test_neg() {
        assert_eq!((-seconds(3)).count(), -3);
        assert_eq!((-Duration::<f64>::new(1.5)).count(), -1.5);
    }

    #[test]
    fn test_scalar_mul_div() {
        let d = milliseconds(300) * 3_i64;
        assert_eq!(d, milliseconds(900));

        let d = 2_u8 * Duration::<i16>::new(21);
        let _: Duration<i16> = d;
        assert_eq!(d.count(), 42);

        let d = Duration::<i32>::new(3) * 1.5_f64;
        let _: Duration<f64> = d;
        assert_eq!(d.count(), 4.5);

        let d = seconds(7) / 2_i64;
        assert_eq!(d.count(), 3);

        let d = Duration::<u32>::new(7) / 2_i32;
        let _: Duration<i64> = d;
        assert_eq!(d.count(), 3);
    }

    #[test]
    fn test_duration_ratio() {
        assert_eq!(minutes(1) / seconds(20), 3);
        assert_eq!(Duration::<f64, Milli>::new(500.0) / seconds(2), 0.25);
    }

    #[test]
    fn test_rem() {
        let d = seconds(17) % 5_i32;
        assert_eq!(d.count(), 2);

        let d = Duration::<u16>::new(17) % 5_u8;
        let _: Duration<u16> = d;
        assert_eq!(d.count(), 2);

        let d = minutes(1) % Duration::<i32>::new(45);
        let _: Seconds = d;
        assert_eq!(d, seconds(15));

        let d = -seconds(17) % 5_i64;
        assert_eq!(d.count(), -2);
    }

    #[test]
    fn test_compound_assign() {
        let mut d = milliseconds(100);
        d += seconds(1);
        assert_eq!(d.count(), 1100);
        d -= milliseconds(200);
        assert_eq!(d.count(), 900);
        d *= 2;
        assert_eq!(d.count(), 1800);
        d /= 4;
        assert_eq!(d.count(), 450);
        d %= 100;
        assert_eq!(d.count(), 50);

        let mut d = Duration::<f64>::new(1.0);
        d += milliseconds(250);
        assert_eq!(d.count(), 1.25);
    }

    #[test]
    fn test_comparison_across_types() {
        assert_eq!(seconds(1), milliseconds(1000));
        assert_ne!(seconds(1), milliseconds(1001));
        assert!(seconds(1) < milliseconds(1001));
        assert!(minutes(2) > Duration::<u8>::new(119));
        assert!(Duration::<f64, Milli>::new(999.5) < seconds(1));
        assert_eq!(Duration::<f32>::new(f32::NAN).partial_cmp(&seconds(1)), None);
    }

    #[test]
    fn test_frame_periods() {
        let d = Duration::<i64, Ratio<1, 30>>::new(1) + milliseconds(1);
        let _: Duration<i64, Ratio<1, 3000>> = d;
        assert_eq!(d.count(), 103);

        assert!(Duration::<i64, Ratio<1, 30>>::new(3) > milliseconds(99));
        assert_eq!(Duration::<i32, Ratio<1, 25>>::new(5), deciseconds(2));
        let d = Duration::<i64, Ratio<1, 24>>::new(5) % Duration::<i64, Ratio<1, 60>>::new(7);
        let _: Duration<i64, Ratio<1, 120>> = d;
        assert_eq!(d.count(), 25 % 14);
    }

    #[test]
    fn test_declared_period() {
        let d = Duration::<i64, Frame>::new(2) + milliseconds(1);
        let _: Duration<i64, Ratio<1, 3000>> = d;
        assert_eq!(d.count(), 203);
        assert_eq!(d.to_string(), "203[1/3000]s");

        assert_eq!(Duration::<i64, Frame>::new(60), seconds(2));
        let d = Duration::<i64, Frame>::new(3) % milliseconds(40);
        assert_eq!(d.count(), 60);
        assert_eq!(Duration::<i64, Frame>::new(45) / seconds(1), 1);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(seconds(1).checked_add(milliseconds(500)).unwrap(), milliseconds(1500));
        assert_eq!(seconds(1).checked_sub(milliseconds(1500)).unwrap().count(), -500);
        assert_eq!(milliseconds(300).checked_mul(3).unwrap(), milliseconds(900));
        assert_eq!(
            Duration::<u128>::new(u128::MAX / 1000)
                .checked_add(Duration::<u128, Milli>::new(u128::MAX % 1000))
                .unwrap()
                .count(),
            u128::MAX
        );

        let err = Duration::<i8>::new(i8::MAX)
            .checked_add(Duration::<i8>::new(1))
            .unwrap_err();
        let expect = expect_test::expect!["Duration arithmetic `127s + 1s` overflows"];
        expect.assert_eq(&err.to_string());
        let expect = expect_test::expect!["Tick overflow: `127 + 1` overflows `i8`"];
        expect.assert_eq(&std::error::Error::source(&err).unwrap().to_string());

        assert!(Duration::<u8>::new(0).checked_sub(Duration::<u8>::new(1)).is_err());
        assert!(seconds(i64::MAX).checked_mul(2).is_err());
        assert!(Duration::<f64>::new(f64::MAX).checked_mul(2.0).is_ok());
    }

    #[test]
    fn test_u128_above_i128_max() {
        let d = Duration::<u128>::new(u128::MAX / 1000)
            + Duration::<u128, Milli>::new(u128::MAX % 1000);
        let _: Duration<u128, Milli> = d;
        assert_eq!(d.count(), u128::MAX);

        assert!(Duration::<u128>::new(u128::MAX / 1000) > Duration::<u128, Milli>::new(1 << 127));
        assert_eq!(
            Duration::<u128>::new(1 << 118),
            Duration::<u128, Milli>::new((1 << 118) * 1000)
        );
        assert_eq!(
            Duration::<u128, Milli>::new(u128::MAX) / Duration::<u128>::new(1),
            u128::MAX / 1000
        );
    }

    #[test]
    fn test_ord_and_sum() {
        let mut durations = vec![seconds(3), seconds(-1), seconds(2)];
        durations.sort();
        assert_eq!(durations, vec![seconds(-1), seconds(2), seconds(3)]);
        assert_eq!(durations.iter().copied().max(), Some(seconds(3)));

        let total: Seconds = durations.into_iter().sum();
        assert_eq!(total, seconds(4));
    }
}
