//! Representations that can be used to count the ticks of a duration
//!
//! Relationships:
//!
//! - [`Representation`] is the closed set of numeric types a tick count can be
//!   stored in. [`Integral`] and [`Floating`] partition it.
//!
//! - [`Arithmetic`] is the superset of [`Representation`]: it also contains `bool`,
//!   which is arithmetic but never a representation and never [`Integral`]
//!
//! - [`CommonRep`] is the promotion table. Two representations without an entry
//!   in the table can not be combined, the compiler rejects the combination

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{AsPrimitive, Num, NumCast};
use snafu::OptionExt;

use crate::error::{Result, TickOverflowError, TickOverflowSnafu};
use crate::macros::{for_all_floatings, for_all_integrals};
use crate::private::Sealed;

/// Kind of the representation. It has a one-to-one mapping to each type that
/// implements [`Representation`]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepKind {
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Signed 128-bit integer
    Int128,
    /// Unsigned 8-bit integer
    UInt8,
    /// Unsigned 16-bit integer
    UInt16,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Unsigned 128-bit integer
    UInt128,
    /// 32-bit float number
    Float32,
    /// 64-bit float number
    Float64,
}

impl RepKind {
    /// Is the kind a floating point number?
    #[inline]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Is the kind an integer?
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_floating()
    }

    /// Can the kind represent negative values?
    #[inline]
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 | Self::UInt128
        )
    }

    /// Width of the kind in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Int8 | Self::UInt8 => 8,
            Self::Int16 | Self::UInt16 => 16,
            Self::Int32 | Self::UInt32 | Self::Float32 => 32,
            Self::Int64 | Self::UInt64 | Self::Float64 => 64,
            Self::Int128 | Self::UInt128 => 128,
        }
    }

    /// Name of the rust type
    #[inline]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Int128 => "i128",
            Self::UInt8 => "u8",
            Self::UInt16 => "u16",
            Self::UInt32 => "u32",
            Self::UInt64 => "u64",
            Self::UInt128 => "u128",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }
}

impl Display for RepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepKind::{:?}", self)
    }
}

/// Trait for the numeric types that can count the ticks of a duration. This trait
/// is sealed, `bool` and user defined types can never implement it
///
/// Conversions between representations go through `f64` when either side is
/// floating point. Integer conversions go through `i128`, integer scaling goes
/// through the sign and the `u128` magnitude of the value such that the whole
/// range of `u128` survives
pub trait Representation:
    Sealed + Num + NumCast + PartialOrd + Copy + Default + Debug + Display + Send + Sync + 'static
{
    /// Kind of this representation
    const KIND: RepKind;

    /// Is this an integer representation?
    const IS_INTEGER: bool = Self::KIND.is_integer();

    /// Is this a floating point representation? Values of any representation can
    /// flow into a floating point one
    const IS_FLOATING: bool = Self::KIND.is_floating();

    /// Smallest finite value
    const MIN: Self;

    /// Largest finite value
    const MAX: Self;

    /// Lossy conversion to `f64`, same semantic as `as`
    fn as_f64(self) -> f64;

    /// Lossy conversion from `f64`, same semantic as `as`
    fn cast_from_f64(value: f64) -> Self;

    /// Lossy conversion to `i128`, same semantic as `as`
    fn as_i128(self) -> i128;

    /// Lossy conversion from `i128`, same semantic as `as`
    fn cast_from_i128(value: i128) -> Self;

    /// Convert from `f64`, returns `None` if the value can not be represented
    #[inline]
    fn checked_from_f64(value: f64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Convert from `i128`, returns `None` if the value can not be represented
    #[inline]
    fn checked_from_i128(value: i128) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Split the value into `(is_negative, magnitude)`. Fractions of a floating
    /// point value are truncated, the magnitude saturates at `u128::MAX`
    fn to_sign_magnitude(self) -> (bool, u128);

    /// Inverse of [`Self::to_sign_magnitude`], same semantic as `as`: integers keep
    /// the low bits of the two's complement value
    fn from_sign_magnitude(negative: bool, magnitude: u128) -> Self;

    /// Inverse of [`Self::to_sign_magnitude`], returns `None` if the value can not
    /// be represented
    #[inline]
    fn checked_from_sign_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
        if !negative {
            <Self as NumCast>::from(magnitude)
        } else if magnitude == i128::MIN.unsigned_abs() {
            <Self as NumCast>::from(i128::MIN)
        } else {
            i128::try_from(magnitude)
                .ok()
                .and_then(|magnitude| <Self as NumCast>::from(-magnitude))
        }
    }

    /// `self + rhs`, returns an error if the result overflows
    fn checked_add_ticks(self, rhs: Self) -> Result<Self, TickOverflowError>;

    /// `self - rhs`, returns an error if the result overflows
    fn checked_sub_ticks(self, rhs: Self) -> Result<Self, TickOverflowError>;

    /// `self * rhs`, returns an error if the result overflows
    fn checked_mul_ticks(self, rhs: Self) -> Result<Self, TickOverflowError>;

    /// Add two tick counts. Integers wrap on overflow, with the `overflow_checks`
    /// feature they panic with the error of [`Self::checked_add_ticks`]
    fn add_ticks(self, rhs: Self) -> Self;

    /// Subtract two tick counts, overflows like [`Self::add_ticks`]
    fn sub_ticks(self, rhs: Self) -> Self;

    /// Multiply two tick counts, overflows like [`Self::add_ticks`]
    fn mul_ticks(self, rhs: Self) -> Self;
}

/// Integer representations. `bool` is integer-like in many type systems but it is
/// excluded here: functions in the integer domain reject it while compiling
pub trait Integral: Representation + Ord + Eq + Hash {
    /// Absolute value, widened to `u128` such that it never overflows
    fn unsigned_abs_u128(self) -> u128;

    /// Conversion from `u128`, same semantic as `as`
    fn from_u128_wrapping(value: u128) -> Self;

    /// Conversion from `u128`, returns `None` if the value can not be represented
    #[inline]
    fn checked_from_u128(value: u128) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

/// Floating point representations
pub trait Floating: Representation {}

/// Built-in arithmetic types: all of the representations and `bool`
pub trait Arithmetic: Sealed + Copy + Send + Sync + 'static {}

impl Sealed for bool {}
impl Arithmetic for bool {}

macro_rules! impl_representation_common {
    ($variant:ident, $ty:ty) => {
        const KIND: RepKind = RepKind::$variant;
        const MIN: Self = <$ty>::MIN;
        const MAX: Self = <$ty>::MAX;

        #[inline]
        fn as_f64(self) -> f64 {
            AsPrimitive::<f64>::as_(self)
        }

        #[inline]
        fn cast_from_f64(value: f64) -> Self {
            AsPrimitive::<$ty>::as_(value)
        }

        #[inline]
        fn as_i128(self) -> i128 {
            AsPrimitive::<i128>::as_(self)
        }

        #[inline]
        fn cast_from_i128(value: i128) -> Self {
            AsPrimitive::<$ty>::as_(value)
        }
    };
}

macro_rules! impl_integral {
    ($({$variant:ident, $ty:ty, $signed:tt}),+) => {
        $(
            impl Sealed for $ty {}

            impl Arithmetic for $ty {}

            impl Representation for $ty {
                impl_representation_common!($variant, $ty);

                #[inline]
                fn to_sign_magnitude(self) -> (bool, u128) {
                    impl_integral!(@sign_magnitude self, $signed)
                }

                #[inline]
                fn from_sign_magnitude(negative: bool, magnitude: u128) -> Self {
                    let value = magnitude as $ty;
                    if negative {
                        value.wrapping_neg()
                    } else {
                        value
                    }
                }

                impl_integral!(@checked checked_add_ticks, checked_add, '+');
                impl_integral!(@checked checked_sub_ticks, checked_sub, '-');
                impl_integral!(@checked checked_mul_ticks, checked_mul, '*');

                impl_integral!(@ticks add_ticks, checked_add_ticks, wrapping_add);
                impl_integral!(@ticks sub_ticks, checked_sub_ticks, wrapping_sub);
                impl_integral!(@ticks mul_ticks, checked_mul_ticks, wrapping_mul);
            }

            impl Integral for $ty {
                #[inline]
                fn unsigned_abs_u128(self) -> u128 {
                    impl_integral!(@abs self, $signed)
                }

                #[inline]
                fn from_u128_wrapping(value: u128) -> Self {
                    value as $ty
                }
            }
        )+
    };
    (@abs $value:expr, true) => {
        $value.unsigned_abs() as u128
    };
    (@abs $value:expr, false) => {
        $value as u128
    };
    (@sign_magnitude $value:expr, true) => {
        ($value < 0, $value.unsigned_abs() as u128)
    };
    (@sign_magnitude $value:expr, false) => {
        (false, $value as u128)
    };
    (@checked $method:ident, $checked:ident, $op:literal) => {
        #[inline]
        fn $method(self, rhs: Self) -> Result<Self, TickOverflowError> {
            self.$checked(rhs).with_context(|| TickOverflowSnafu {
                lhs: self.to_string(),
                op: $op,
                rhs: rhs.to_string(),
                kind: Self::KIND,
            })
        }
    };
    (@ticks $method:ident, $checked:ident, $wrapping:ident) => {
        #[inline]
        fn $method(self, rhs: Self) -> Self {
            #[cfg(feature = "overflow_checks")]
            {
                match self.$checked(rhs) {
                    Ok(ticks) => ticks,
                    Err(e) => panic!("{}", e),
                }
            }

            #[cfg(not(feature = "overflow_checks"))]
            {
                self.$wrapping(rhs)
            }
        }
    };
}

for_all_integrals!(impl_integral);

macro_rules! impl_floating {
    ($({$variant:ident, $ty:ty}),+) => {
        $(
            impl Sealed for $ty {}

            impl Arithmetic for $ty {}

            impl Representation for $ty {
                impl_representation_common!($variant, $ty);

                #[inline]
                fn to_sign_magnitude(self) -> (bool, u128) {
                    (self < 0.0, self.abs() as u128)
                }

                #[inline]
                fn from_sign_magnitude(negative: bool, magnitude: u128) -> Self {
                    let value = magnitude as $ty;
                    if negative { -value } else { value }
                }

                #[inline]
                fn checked_add_ticks(self, rhs: Self) -> Result<Self, TickOverflowError> {
                    Ok(self + rhs)
                }

                #[inline]
                fn checked_sub_ticks(self, rhs: Self) -> Result<Self, TickOverflowError> {
                    Ok(self - rhs)
                }

                #[inline]
                fn checked_mul_ticks(self, rhs: Self) -> Result<Self, TickOverflowError> {
                    Ok(self * rhs)
                }

                #[inline]
                fn add_ticks(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_ticks(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_ticks(self, rhs: Self) -> Self {
                    self * rhs
                }
            }

            impl Floating for $ty {}
        )+
    };
}

for_all_floatings!(impl_floating);

/// Common representation of `Self` and `Rhs`: the representation that the
/// combination of the two is computed in
///
/// - floating point dominates integer, `f64` dominates `f32`
///
/// - among integers of the same signedness, the wider one dominates
///
/// - a signed integer strictly wider than an unsigned one dominates it, otherwise
///   the result is the signed integer that is twice as wide as the unsigned one
///
/// - `u128` and a signed integer have no common representation
///
/// The table is symmetric and `T` combined with itself is `T`
pub trait CommonRep<Rhs: Representation>: Representation {
    /// The promoted representation
    type Output: Representation;
}

impl<T: Representation> CommonRep<T> for T {
    type Output = T;
}

macro_rules! impl_common_rep {
    ($(($lhs:ty, $rhs:ty) => $output:ty),+ $(,)?) => {
        $(
            impl CommonRep<$rhs> for $lhs {
                type Output = $output;
            }

            impl CommonRep<$lhs> for $rhs {
                type Output = $output;
            }
        )+
    };
}

impl_common_rep! {
    // Signed integers
    (i8, i16) => i16,
    (i8, i32) => i32,
    (i8, i64) => i64,
    (i8, i128) => i128,
    (i16, i32) => i32,
    (i16, i64) => i64,
    (i16, i128) => i128,
    (i32, i64) => i64,
    (i32, i128) => i128,
    (i64, i128) => i128,
    // Unsigned integers
    (u8, u16) => u16,
    (u8, u32) => u32,
    (u8, u64) => u64,
    (u8, u128) => u128,
    (u16, u32) => u32,
    (u16, u64) => u64,
    (u16, u128) => u128,
    (u32, u64) => u64,
    (u32, u128) => u128,
    (u64, u128) => u128,
    // Mixed signedness
    (i8, u8) => i16,
    (i8, u16) => i32,
    (i8, u32) => i64,
    (i8, u64) => i128,
    (i16, u8) => i16,
    (i16, u16) => i32,
    (i16, u32) => i64,
    (i16, u64) => i128,
    (i32, u8) => i32,
    (i32, u16) => i32,
    (i32, u32) => i64,
    (i32, u64) => i128,
    (i64, u8) => i64,
    (i64, u16) => i64,
    (i64, u32) => i64,
    (i64, u64) => i128,
    (i128, u8) => i128,
    (i128, u16) => i128,
    (i128, u32) => i128,
    (i128, u64) => i128,
    // Floating points
    (f32, f64) => f64,
    (f32, i8) => f32,
    (f32, i16) => f32,
    (f32, i32) => f32,
    (f32, i64) => f32,
    (f32, i128) => f32,
    (f32, u8) => f32,
    (f32, u16) => f32,
    (f32, u32) => f32,
    (f32, u64) => f32,
    (f32, u128) => f32,
    (f64, i8) => f64,
    (f64, i16) => f64,
    (f64, i32) => f64,
    (f64, i64) => f64,
    (f64, i128) => f64,
    (f64, u8) => f64,
    (f64, u16) => f64,
    (f64, u32) => f64,
    (f64, u64) => f64,
    (f64, u128) => f64,
}

/// Kind of the common representation of `L` and `R`
#[inline]
pub const fn common_kind<L, R>() -> RepKind
where
    L: CommonRep<R>,
    R: Representation,
{
    <<L as CommonRep<R>>::Output as Representation>::KIND
}
