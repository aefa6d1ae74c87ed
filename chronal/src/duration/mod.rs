//! [`Duration`]: a tick count parameterized by its representation and its period
//!
//! Combining two durations never reinterprets a tick count in place. Both operands
//! are converted into their common type first:
//!
//! - the common representation comes from [`CommonRep`]
//!
//! - the common period comes from [`CommonPeriod`]
//!
//! Implicit conversion (see [`Duration::from_duration`]) is only allowed when it
//! can not lose precision, anything else must be spelled out with
//! [`Duration::cast`], [`Duration::floor`], [`Duration::ceil`] or [`Duration::round`]
//!
//! ```compile_fail
//! use chronal::duration::{Duration, Milliseconds, Seconds};
//!
//! // Truncating 1500ms into seconds must be explicit
//! let _ = Seconds::from_duration(Milliseconds::new(1500));
//! ```
//!
//! `cast` and `from_duration` can not run in const context, each pair of
//! representations has a `const fn` counterpart instead, see `cast_<rep>` and
//! `into_<rep>`

mod const_cast;
mod display;
mod ops;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_period::ratio::{
    Centi, DayPeriod, Deci, HourPeriod, Micro, Milli, MinutePeriod, Nano, Unit, WeekPeriod,
    ratio_divide,
};
use num_period::{CommonPeriod, CommonRep, Integral, Period, RatioValue, Representation};
use snafu::OptionExt;

use crate::error::{OverflowSnafu, Result};
use crate::private::Sealed;

/// Duration with `count` ticks, each tick lasts `P` seconds
///
/// The tick count is stored in exactly the representation `R`. Period defaults to
/// one second
#[derive(Clone, Copy)]
pub struct Duration<R: Representation, P: Period = Unit> {
    count: R,
    _period: PhantomData<P>,
}

/// Trait implemented by all of the [`Duration`]s, it exposes the representation and
/// the period to the code that is generic over durations
pub trait DurationType: Sealed + Copy + Debug + Send + Sync + 'static {
    /// Representation of the tick count
    type Rep: Representation;
    /// Period of a tick
    type Period: Period;

    /// Number of ticks
    fn count(self) -> Self::Rep;
}

impl<R: Representation, P: Period> Sealed for Duration<R, P> {}

impl<R: Representation, P: Period> DurationType for Duration<R, P> {
    type Rep = R;
    type Period = P;

    #[inline]
    fn count(self) -> R {
        self.count
    }
}

/// Common type of two durations: the type their combination is computed in
pub trait CommonDuration<Rhs: DurationType>: DurationType {
    /// The common duration
    type Output: DurationType;
}

impl<R1, P1, R2, P2> CommonDuration<Duration<R2, P2>> for Duration<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
{
    type Output = Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>;
}

/// Common duration of `L` and `R`
pub type CommonOf<L, R> = <L as CommonDuration<R>>::Output;

/// Can a duration of `(R2, P2)` flow into a duration of `(R1, P1)` without an
/// explicit cast?
///
/// - any value can flow into a floating point representation
///
/// - between integer representations, `P2` must be a whole multiple of `P1`: the
///   conversion only ever refines the period, it never truncates
#[inline]
pub const fn is_implicitly_convertible<R2, P2, R1, P1>() -> bool
where
    R2: Representation,
    P2: Period,
    R1: Representation,
    P1: Period,
{
    R1::IS_FLOATING || (ratio_divide(P2::VALUE, P1::VALUE).is_integer() && !R2::IS_FLOATING)
}

/// Convert a single value between representations
#[inline]
pub(crate) fn cast_rep<R: Representation, R2: Representation>(value: R) -> R2 {
    if R::IS_FLOATING || R2::IS_FLOATING {
        R2::cast_from_f64(value.as_f64())
    } else {
        R2::cast_from_i128(value.as_i128())
    }
}

/// Convert a tick count with the conversion factor `cf`. The special cases avoid
/// useless multiplications/divisions such that an integer converted to floating
/// point is exact as long as the scaled value is representable.
///
/// Integers are scaled as `u128` magnitudes, the sign is applied afterwards. It
/// truncates toward zero and keeps the whole range of `u128`
#[inline]
fn cast_ticks<R: Representation, R2: Representation>(count: R, cf: RatioValue) -> R2 {
    let (num, den) = (cf.num(), cf.den());
    if R::IS_FLOATING || R2::IS_FLOATING {
        let count = count.as_f64();
        let ticks = match (num, den) {
            (1, 1) => count,
            (_, 1) => count * num as f64,
            (1, _) => count / den as f64,
            _ => count * num as f64 / den as f64,
        };
        R2::cast_from_f64(ticks)
    } else {
        let (negative, magnitude) = count.to_sign_magnitude();
        let ticks = match (num as u128, den as u128) {
            (1, 1) => magnitude,
            (num, 1) => magnitude.wrapping_mul(num),
            (1, den) => magnitude / den,
            (num, den) => magnitude.wrapping_mul(num) / den,
        };
        R2::from_sign_magnitude(negative, ticks)
    }
}

/// Convert both operands into their common duration and return the tick counts
#[inline]
pub(crate) fn common_counts<R1, P1, R2, P2>(
    lhs: Duration<R1, P1>,
    rhs: Duration<R2, P2>,
) -> (<R1 as CommonRep<R2>>::Output, <R1 as CommonRep<R2>>::Output)
where
    R1: CommonRep<R2>,
    R2: Representation,
    P1: CommonPeriod<P2>,
    P2: Period,
{
    let lhs = lhs.cast::<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>();
    let rhs = rhs.cast::<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>();
    (lhs.count, rhs.count)
}

impl<R: Representation, P: Period> Duration<R, P> {
    /// Period of a tick
    pub const PERIOD: RatioValue = P::VALUE;

    /// Create a new duration with `count` ticks
    #[inline]
    pub const fn new(count: R) -> Self {
        const { assert!(P::NUM > 0, "Period of a duration should be positive") };
        Self {
            count,
            _period: PhantomData,
        }
    }

    /// Create a new duration from a tick count stored in another representation.
    /// A floating point count can only be used when `R` is floating point too
    ///
    /// ```compile_fail
    /// use chronal::duration::Duration;
    ///
    /// let _ = Duration::<i32>::from_count(1.5_f64);
    /// ```
    #[inline]
    pub fn from_count<R2: Representation>(count: R2) -> Self {
        const {
            assert!(
                R::IS_FLOATING || !R2::IS_FLOATING,
                "A floating point tick count can only initialize a floating point duration"
            )
        };
        Self::new(cast_rep::<R2, R>(count))
    }

    /// Number of ticks
    #[inline]
    pub const fn count(self) -> R {
        self.count
    }

    /// Zero length duration
    #[inline]
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// Smallest duration of this type
    #[inline]
    pub const fn min_value() -> Self {
        Self::new(R::MIN)
    }

    /// Largest duration of this type
    #[inline]
    pub const fn max_value() -> Self {
        Self::new(R::MAX)
    }

    /// Can a duration of `(R2, P2)` be converted into `Self` implicitly? See
    /// [`is_implicitly_convertible`]
    #[inline]
    pub const fn accepts<R2: Representation, P2: Period>() -> bool {
        is_implicitly_convertible::<R2, P2, R, P>()
    }

    /// Convert a duration of another type into `Self` without losing precision.
    ///
    /// Fails to compile when the conversion could truncate: `R` is integer and
    /// either `R2` is floating point or `P2` is not a whole multiple of `P`
    #[inline]
    pub fn from_duration<R2: Representation, P2: Period>(other: Duration<R2, P2>) -> Self {
        const {
            assert!(
                is_implicitly_convertible::<R2, P2, R, P>(),
                "Implicit conversion may truncate, use `cast`, `floor`, `ceil` or `round`"
            )
        };
        other.cast()
    }

    /// Convert into another duration type. Truncates toward zero when the target
    /// can not represent the value exactly
    #[inline]
    pub fn cast<R2: Representation, P2: Period>(self) -> Duration<R2, P2> {
        let cf = const { ratio_divide(P::VALUE, P2::VALUE) };
        Duration::new(cast_ticks::<R, R2>(self.count, cf))
    }

    /// Same as [`Self::cast`], but returns an error instead of wrapping when the
    /// result does not fit into `R2`
    pub fn checked_cast<R2: Representation, P2: Period>(self) -> Result<Duration<R2, P2>> {
        let cf = const { ratio_divide(P::VALUE, P2::VALUE) };
        let (num, den) = (cf.num(), cf.den());

        let ticks = if R::IS_FLOATING || R2::IS_FLOATING {
            R2::checked_from_f64(self.count.as_f64() * num as f64 / den as f64)
        } else {
            let (negative, magnitude) = self.count.to_sign_magnitude();
            magnitude
                .checked_mul(num as u128)
                .and_then(|ticks| R2::checked_from_sign_magnitude(negative, ticks / den as u128))
        };

        let ticks = ticks.with_context(|| {
            tracing::debug!(
                "Checked cast of `{:?}` into `{}` overflows",
                self,
                std::any::type_name::<R2>()
            );
            OverflowSnafu {
                count: self.count.to_string(),
                from: type_description::<R, P>(),
                to: type_description::<R2, P2>(),
            }
        })?;

        Ok(Duration::new(ticks))
    }

    /// Convert into another duration type, rounding toward negative infinity
    pub fn floor<R2, P2>(self) -> Duration<R2, P2>
    where
        R2: CommonRep<R>,
        P2: CommonPeriod<P>,
    {
        let truncated = self.cast::<R2, P2>();
        if truncated > self {
            Duration::new(truncated.count.sub_ticks(R2::one()))
        } else {
            truncated
        }
    }

    /// Convert into another duration type, rounding toward positive infinity
    pub fn ceil<R2, P2>(self) -> Duration<R2, P2>
    where
        R2: CommonRep<R>,
        P2: CommonPeriod<P>,
    {
        let truncated = self.cast::<R2, P2>();
        if truncated < self {
            Duration::new(truncated.count.add_ticks(R2::one()))
        } else {
            truncated
        }
    }

    /// Convert into another duration type with an integer representation, rounding
    /// to nearest and ties to even
    ///
    /// The upper neighbour is only computed when it is the result, rounding a value
    /// close to `R2::MAX` down never overflows
    pub fn round<R2, P2>(self) -> Duration<R2, P2>
    where
        R2: Integral + CommonRep<R>,
        P2: CommonPeriod<P>,
        R: CommonRep<R2>,
        P: CommonPeriod<P2>,
    {
        let lower = self.floor::<R2, P2>();
        let (count, lower_count) = common_counts(self, lower);
        let (_, tick) = common_counts(self, Duration::<R2, P2>::new(R2::one()));
        let lower_diff = count.sub_ticks(lower_count);
        let upper_diff = tick.sub_ticks(lower_diff);

        let round_up = match lower_diff.partial_cmp(&upper_diff) {
            Some(Ordering::Less) => false,
            Some(Ordering::Greater) => true,
            _ => lower.count % (R2::one() + R2::one()) != R2::zero(),
        };

        if round_up {
            Duration::new(lower.count.add_ticks(R2::one()))
        } else {
            lower
        }
    }
}

impl<R, P> Duration<R, P>
where
    R: Representation + std::ops::Neg<Output = R>,
    P: Period,
{
    /// Absolute value of the duration
    #[inline]
    pub fn abs(self) -> Self {
        if self.count < R::zero() {
            Self::new(-self.count)
        } else {
            self
        }
    }
}

impl<R: Representation, P: Period> Default for Duration<R, P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Representation, P: Period> Debug for Duration<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duration")
            .field("count", &self.count)
            .field("period", &format_args!("{}", P::VALUE))
            .finish()
    }
}

impl<R: Representation + Hash, P: Period> Hash for Duration<R, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

fn type_description<R: Representation, P: Period>() -> String {
    format!("Duration<{}, {}>", R::KIND.type_name(), P::VALUE)
}

macro_rules! duration_alias {
    ($({$period:ident, $plural:ident, $num:literal, $den:literal}),+) => {
        paste::paste! {
            $(
                #[doc = concat!("Duration counted in ", stringify!($plural), " with `i64` ticks")]
                pub type [<$plural:camel>] = Duration<i64, $period>;

                #[doc = concat!("Create a duration of `count` ", stringify!($plural))]
                #[inline]
                pub const fn $plural(count: i64) -> [<$plural:camel>] {
                    Duration::new(count)
                }
            )+
        }
    };
}

num_period::for_all_periods!(duration_alias);
