//! Compile-time rational numbers
//!
//! A [`Ratio`] is a zero sized type carrying a numerator and a denominator as const
//! generics. When it is used as a [`Period`], its associated constants check that
//! the denominator is positive and that the pair is in lowest terms. The check runs
//! while compiling: a `Ratio<2, 4>` period is rejected, it never reaches the binary.
//!
//! [`RatioValue`] is the value form of the same number. All of its arithmetic is
//! `const fn`, such that the type level rules (common period, conversion legality)
//! are computed by the const evaluator

use std::fmt::{Debug, Display};

use snafu::ensure;

use crate::__private::PeriodSealed;
use crate::error::{OverflowSnafu, Result, ZeroDenominatorSnafu};

/// Greatest common divisor of the absolute values. `gcd(0, 0)` is `0`
#[inline]
pub const fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

/// Least common multiple of the absolute values. `lcm(x, 0)` is `0`
#[inline]
pub const fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Rational number in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatioValue {
    num: i64,
    den: i64,
}

impl RatioValue {
    /// One
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Create a new ratio, reduced to lowest terms
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero or either part is `i64::MIN`. In const context the
    /// panic is a compile error
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Denominator of the ratio can not be zero");
        assert!(
            num != i64::MIN && den != i64::MIN,
            "Ratio can not contain `i64::MIN`"
        );

        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Create a new ratio from values that are only known at runtime
    pub fn try_new(num: i64, den: i64) -> Result<Self> {
        ensure!(den != 0, ZeroDenominatorSnafu { num });
        ensure!(
            num != i64::MIN && den != i64::MIN,
            OverflowSnafu { num, den }
        );
        Ok(Self::new(num, den))
    }

    /// Numerator, carries the sign
    #[inline]
    pub const fn num(self) -> i64 {
        self.num
    }

    /// Denominator, always positive
    #[inline]
    pub const fn den(self) -> i64 {
        self.den
    }

    /// Is the ratio a whole number?
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// `self * rhs`, cross-cancelled before multiplying
    #[inline]
    pub const fn multiply(self, rhs: Self) -> Self {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Self::new(
            (self.num / g1) * (rhs.num / g2),
            (self.den / g2) * (rhs.den / g1),
        )
    }

    /// `self / rhs`, cross-cancelled before multiplying
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero
    #[inline]
    pub const fn divide(self, rhs: Self) -> Self {
        assert!(rhs.num != 0, "Can not divide by a zero ratio");
        let g1 = gcd(self.num, rhs.num);
        let g2 = gcd(self.den, rhs.den);
        Self::new(
            (self.num / g1) * (rhs.den / g2),
            (self.den / g2) * (rhs.num / g1),
        )
    }

    /// The largest ratio that divides both `self` and `rhs` a whole number of times:
    /// `gcd(numerators) / lcm(denominators)`. Symmetric in its arguments
    #[inline]
    pub const fn common(self, rhs: Self) -> Self {
        Self::new(gcd(self.num, rhs.num), lcm(self.den, rhs.den))
    }
}

impl Display for RatioValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Common period of `lhs` and `rhs`, see [`RatioValue::common`]
#[inline]
pub const fn common_period(lhs: RatioValue, rhs: RatioValue) -> RatioValue {
    lhs.common(rhs)
}

/// `lhs / rhs`. Converting a tick of period `lhs` into ticks of period `rhs`
/// multiplies the count by this ratio
#[inline]
pub const fn ratio_divide(lhs: RatioValue, rhs: RatioValue) -> RatioValue {
    lhs.divide(rhs)
}

/// Type level rational number `N / D`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ratio<const N: i64, const D: i64>;

/// Compile-time rational number used as the length of a tick, in seconds. It is
/// implemented by [`Ratio`] and by the types declared with
/// [`define_period!`](crate::define_period)
pub trait Period: PeriodSealed + Copy + Default + Debug + Send + Sync + 'static {
    /// Numerator
    const NUM: i64;
    /// Denominator, positive
    const DEN: i64;
    /// Value form of the period
    const VALUE: RatioValue;
}

impl<const N: i64, const D: i64> PeriodSealed for Ratio<N, D> {}

impl<const N: i64, const D: i64> Period for Ratio<N, D> {
    const NUM: i64 = {
        assert!(D > 0, "Denominator of the ratio should be positive");
        assert!(gcd(N, D) == 1, "Ratio should be in lowest terms");
        N
    };

    const DEN: i64 = {
        assert!(D > 0, "Denominator of the ratio should be positive");
        assert!(gcd(N, D) == 1, "Ratio should be in lowest terms");
        D
    };

    const VALUE: RatioValue = RatioValue {
        num: Self::NUM,
        den: Self::DEN,
    };
}

macro_rules! period_alias {
    ($({$alias:ident, $plural:ident, $num:literal, $den:literal}),+) => {
        $(
            #[doc = concat!(
                "Period of a tick in ", stringify!($plural), ": ",
                stringify!($num), "/", stringify!($den), " second"
            )]
            pub type $alias = Ratio<$num, $den>;
        )+
    };
}

crate::for_all_periods!(period_alias);

/// Declare a period type whose ticks last `num/den` seconds. The ratio must be in
/// lowest terms with a positive denominator, otherwise the declaration fails to
/// compile as soon as the period is used
///
/// ```
/// num_period::define_period!(
///     /// One frame of a 30 fps video
///     pub Frame = 1 / 30
/// );
///
/// use num_period::Period;
/// assert_eq!((Frame::NUM, Frame::DEN), (1, 30));
/// ```
#[macro_export]
macro_rules! define_period {
    ($(#[$attr:meta])* $vis:vis $name:ident = $num:literal / $den:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::__private::PeriodSealed for $name {}

        impl $crate::Period for $name {
            const NUM: i64 = <$crate::Ratio<$num, $den> as $crate::Period>::NUM;
            const DEN: i64 = <$crate::Ratio<$num, $den> as $crate::Period>::DEN;
            const VALUE: $crate::RatioValue = <$crate::Ratio<$num, $den> as $crate::Period>::VALUE;
        }
    };
}

/// Common period of `Self` and `Rhs`: the period a combination of two durations
/// is computed in. The output is always the [`Ratio`] computed by [`common_period`].
///
/// Implemented for a period with itself, for every pair of the named periods and
/// the frame periods `1/24`, `1/25`, `1/30`, `1/50` and `1/60`. Other pairs are
/// registered with [`impl_common_period!`](crate::impl_common_period)
pub trait CommonPeriod<Rhs: Period>: Period {
    /// The common period
    type Output: Period;
}

impl<P: Period> CommonPeriod<P> for P {
    type Output = P;
}

/// Implement [`CommonPeriod`](crate::CommonPeriod) between `period` and each of
/// the `others`, in both directions
///
/// Outside of this crate one side of each pair must be a local type, usually a
/// period declared with [`define_period!`](crate::define_period):
///
/// ```
/// use num_period::ratio::{Milli, Unit};
/// use num_period::{CommonPeriod, Period};
///
/// num_period::define_period!(Tick = 1 / 64);
/// num_period::impl_common_period!(Tick => Milli, Unit);
///
/// assert_eq!(<<Tick as CommonPeriod<Milli>>::Output as Period>::DEN, 8000);
/// assert_eq!(<<Unit as CommonPeriod<Tick>>::Output as Period>::DEN, 64);
/// ```
#[macro_export]
macro_rules! impl_common_period {
    (@pairs) => {};
    (@pairs $head:ty $(, $tail:ty)*) => {
        $crate::impl_common_period!($head => $($tail),*);
        $crate::impl_common_period!(@pairs $($tail),*);
    };
    ($period:ty => $($other:ty),* $(,)?) => {
        $(
            impl $crate::CommonPeriod<$other> for $period {
                type Output = $crate::Ratio<
                    {
                        $crate::ratio::common_period(
                            <$period as $crate::Period>::VALUE,
                            <$other as $crate::Period>::VALUE,
                        )
                        .num()
                    },
                    {
                        $crate::ratio::common_period(
                            <$period as $crate::Period>::VALUE,
                            <$other as $crate::Period>::VALUE,
                        )
                        .den()
                    },
                >;
            }

            impl $crate::CommonPeriod<$period> for $other {
                type Output = <$period as $crate::CommonPeriod<$other>>::Output;
            }
        )*
    };
}

macro_rules! impl_builtin_common_periods {
    ($({$alias:ident, $plural:ident, $num:literal, $den:literal}),+) => {
        crate::impl_common_period!(
            @pairs $($alias,)+ Ratio<1, 24>, Ratio<1, 25>, Ratio<1, 30>, Ratio<1, 50>, Ratio<1, 60>
        );
    };
}

crate::for_all_periods!(impl_builtin_common_periods);

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert!(Milli::NUM == 1 && Milli::DEN == 1000);
    const _: () = assert!(<<MinutePeriod as CommonPeriod<HourPeriod>>::Output as Period>::NUM == 60);
    const _: () = assert!(<<DayPeriod as CommonPeriod<WeekPeriod>>::Output as Period>::NUM == 86_400);
    const _: () = assert!(<<Milli as CommonPeriod<HourPeriod>>::Output as Period>::DEN == 1000);

    type Common<L, R> = <L as CommonPeriod<R>>::Output;

    const _: () = assert!(<Common<Ratio<1, 30>, Milli> as Period>::DEN == 3000);
    const _: () = assert!(<Common<Ratio<1, 24>, Ratio<1, 60>> as Period>::DEN == 120);

    crate::define_period!(
        /// Tick of a 64 Hz timer
        Tick = 1 / 64
    );
    crate::impl_common_period!(Tick => Milli, Unit, Ratio<1, 30>, MinutePeriod);

    fn common<L: CommonPeriod<R>, R: Period>() -> RatioValue {
        <<L as CommonPeriod<R>>::Output as Period>::VALUE
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(-4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
    }

    #[test]
    fn test_ratio_value_reduces() {
        let ratio = RatioValue::new(6, -8);
        assert_eq!((ratio.num(), ratio.den()), (-3, 4));
        assert_eq!(RatioValue::new(0, 5), RatioValue::new(0, 1));
        assert_eq!(RatioValue::new(3000, 3).to_string(), "1000/1");
    }

    #[test]
    fn test_ratio_value_try_new() {
        assert!(RatioValue::try_new(5, 10).is_ok());

        let expect = expect_test::expect!["Ratio `5/0` has a zero denominator"];
        expect.assert_eq(&RatioValue::try_new(5, 0).unwrap_err().to_string());

        assert!(matches!(
            RatioValue::try_new(i64::MIN, 3),
            Err(crate::error::RatioError::Overflow { .. })
        ));
    }

    #[test]
    fn test_ratio_divide() {
        // One minute has 60_000 milliseconds
        let cf = ratio_divide(MinutePeriod::VALUE, Milli::VALUE);
        assert_eq!((cf.num(), cf.den()), (60_000, 1));
        assert!(cf.is_integer());

        // One millisecond is 1/60_000 minutes
        let cf = ratio_divide(Milli::VALUE, MinutePeriod::VALUE);
        assert_eq!((cf.num(), cf.den()), (1, 60_000));

        // Cross-cancellation keeps huge ratios in range
        let cf = ratio_divide(Nano::VALUE, WeekPeriod::VALUE);
        assert_eq!((cf.num(), cf.den()), (1, 604_800_000_000_000));

        let cf = RatioValue::new(2, 3).multiply(RatioValue::new(9, 4));
        assert_eq!((cf.num(), cf.den()), (3, 2));
    }

    #[test]
    fn test_common_period_sub_second_and_coarse() {
        assert_eq!(common::<Milli, Micro>(), Micro::VALUE);
        assert_eq!(common::<Micro, Milli>(), Micro::VALUE);
        assert_eq!(common::<MinutePeriod, Unit>(), Unit::VALUE);
        assert_eq!(common::<HourPeriod, MinutePeriod>(), MinutePeriod::VALUE);
        assert_eq!(common::<WeekPeriod, DayPeriod>(), DayPeriod::VALUE);
        assert_eq!(common::<Deci, Centi>(), Centi::VALUE);
        assert_eq!(common::<Deci, WeekPeriod>(), Deci::VALUE);
    }

    #[test]
    fn test_common_period_is_idempotent() {
        assert_eq!(common::<Milli, Milli>(), Milli::VALUE);
        assert_eq!(common::<Ratio<7, 3>, Ratio<7, 3>>(), RatioValue::new(7, 3));
    }

    #[test]
    fn test_common_period_of_frame_periods() {
        assert_eq!(common::<Ratio<1, 30>, Milli>(), RatioValue::new(1, 3000));
        assert_eq!(common::<Milli, Ratio<1, 30>>(), RatioValue::new(1, 3000));
        assert_eq!(common::<Ratio<1, 25>, Deci>(), RatioValue::new(1, 50));
        assert_eq!(common::<Ratio<1, 24>, Ratio<1, 30>>(), RatioValue::new(1, 120));
        assert_eq!(common::<HourPeriod, Ratio<1, 60>>(), RatioValue::new(1, 60));
    }

    #[test]
    fn test_common_period_of_declared_period() {
        assert_eq!((Tick::NUM, Tick::DEN), (1, 64));
        assert_eq!(common::<Tick, Milli>(), RatioValue::new(1, 8000));
        assert_eq!(common::<Milli, Tick>(), RatioValue::new(1, 8000));
        assert_eq!(common::<Unit, Tick>(), Tick::VALUE);
        assert_eq!(common::<Tick, Ratio<1, 30>>(), RatioValue::new(1, 960));
        assert_eq!(common::<MinutePeriod, Tick>(), Tick::VALUE);
        assert_eq!(common::<Tick, Tick>(), Tick::VALUE);
    }

    #[test]
    fn test_common_period_value_is_symmetric() {
        let a = RatioValue::new(3, 8);
        let b = RatioValue::new(9, 20);
        assert_eq!(common_period(a, b), common_period(b, a));
        assert_eq!(common_period(a, b), RatioValue::new(3, 40));
    }
}
