//! Conversions that can run in const context
//!
//! [`Duration::cast`] is generic over the target representation and relies on trait
//! methods, which are not callable in const context. Each pair of representations
//! gets its own `const fn` instead:
//!
//! - `cast_<rep>` computes exactly what [`Duration::cast`] computes
//!
//! - `into_<rep>` is the checked form of [`Duration::from_duration`], a conversion
//!   that may truncate fails to compile
//!
//! ```
//! use chronal::duration::Duration;
//! use chronal::num_period::ratio::Milli;
//!
//! const MS: Duration<f64, Milli> = Duration::<i32>::new(3).into_f64::<Milli>();
//! const _: () = assert!(MS.count() == 3000.0);
//! ```
//!
//! ```compile_fail
//! use chronal::duration::{Duration, Seconds};
//! use chronal::num_period::ratio::{Milli, Unit};
//!
//! const S: Seconds = Duration::<i64, Milli>::new(1500).into_i64::<Unit>();
//! ```

use num_period::ratio::ratio_divide;
use num_period::{Period, Representation};

use super::{Duration, is_implicitly_convertible};

macro_rules! impl_const_cast {
    ($({$variant:ident, $ty:ident}),+) => {
        impl_const_cast!(@each [$({$variant, $ty}),+] $($ty)+);
    };
    (@each $targets:tt $($source:ident)+) => {
        $(impl_const_cast!(@source $source, $targets);)+
    };
    (@source $source:ident, [$({$variant:ident, $target:ident}),+]) => {
        impl<P: Period> Duration<$source, P> {
            paste::paste! {
                $(
                    #[doc = concat!(
                        "Convert into a duration with `", stringify!($target),
                        "` ticks, same as [`Self::cast`] but usable in const context"
                    )]
                    #[inline]
                    pub const fn [<cast_ $target>]<P2: Period>(self) -> Duration<$target, P2> {
                        let cf = const { ratio_divide(P::VALUE, P2::VALUE) };
                        let (num, den) = (cf.num(), cf.den());

                        let count = if <$source as Representation>::IS_FLOATING
                            || <$target as Representation>::IS_FLOATING
                        {
                            let count = self.count as f64;
                            let ticks = match (num, den) {
                                (1, 1) => count,
                                (_, 1) => count * num as f64,
                                (1, _) => count / den as f64,
                                _ => count * num as f64 / den as f64,
                            };
                            ticks as $target
                        } else {
                            let negative = <$source as Representation>::KIND.is_signed()
                                && (self.count as i128) < 0;
                            let magnitude = if negative {
                                (self.count as i128).unsigned_abs()
                            } else {
                                self.count as u128
                            };
                            let ticks = match (num as u128, den as u128) {
                                (1, 1) => magnitude,
                                (num, 1) => magnitude.wrapping_mul(num),
                                (1, den) => magnitude / den,
                                (num, den) => magnitude.wrapping_mul(num) / den,
                            };
                            // Two's complement keeps the low bits for every target
                            let ticks = ticks as i128;
                            (if negative { ticks.wrapping_neg() } else { ticks }) as $target
                        };

                        Duration::new(count)
                    }

                    #[doc = concat!(
                        "Convert into a duration with `", stringify!($target),
                        "` ticks without losing precision, same as [`Duration::from_duration`]",
                        " but usable in const context"
                    )]
                    #[inline]
                    pub const fn [<into_ $target>]<P2: Period>(self) -> Duration<$target, P2> {
                        const {
                            assert!(
                                is_implicitly_convertible::<$source, P, $target, P2>(),
                                "Implicit conversion may truncate, use `cast`, `floor`, `ceil` or `round`"
                            )
                        };
                        self.[<cast_ $target>]::<P2>()
                    }
                )+
            }
        }
    };
}

num_period::for_all_representations!(impl_const_cast);
