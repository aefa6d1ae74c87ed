//! Macros used in the num-period

/// Call macro for all representations that can count ticks
///
/// Tuple: {rep kind variant, element type}
#[macro_export]
macro_rules! for_all_representations {
    ($macro:ident) => {
        $macro! {
            {Int8, i8},
            {Int16, i16},
            {Int32, i32},
            {Int64, i64},
            {Int128, i128},
            {UInt8, u8},
            {UInt16, u16},
            {UInt32, u32},
            {UInt64, u64},
            {UInt128, u128},
            {Float32, f32},
            {Float64, f64}
        }
    };
}

/// Call macro for all integer representations
///
/// Tuple: {rep kind variant, element type, is signed}
macro_rules! for_all_integrals {
    ($macro:ident) => {
        $macro! {
            {Int8, i8, true},
            {Int16, i16, true},
            {Int32, i32, true},
            {Int64, i64, true},
            {Int128, i128, true},
            {UInt8, u8, false},
            {UInt16, u16, false},
            {UInt32, u32, false},
            {UInt64, u64, false},
            {UInt128, u128, false}
        }
    };
}

pub(crate) use for_all_integrals;

/// Call macro for all floating point representations
///
/// Tuple: {rep kind variant, element type}
macro_rules! for_all_floatings {
    ($macro:ident) => {
        $macro! {
            {Float32, f32},
            {Float64, f64}
        }
    };
}

pub(crate) use for_all_floatings;

/// Call macro for all named periods. The list is closed under the common period
/// rule: the common period of any two entries is again an entry
///
/// Tuple: {period alias, plural unit name, numerator, denominator}
#[macro_export]
macro_rules! for_all_periods {
    ($macro:ident) => {
        $macro! {
            {Nano, nanoseconds, 1, 1_000_000_000},
            {Micro, microseconds, 1, 1_000_000},
            {Milli, milliseconds, 1, 1_000},
            {Centi, centiseconds, 1, 100},
            {Deci, deciseconds, 1, 10},
            {Unit, seconds, 1, 1},
            {MinutePeriod, minutes, 60, 1},
            {HourPeriod, hours, 3_600, 1},
            {DayPeriod, days, 86_400, 1},
            {WeekPeriod, weeks, 604_800, 1}
        }
    };
}
