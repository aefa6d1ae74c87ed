//! Error in chronal

use num_period::error::TickOverflowError;
use snafu::Snafu;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DurationError {
    #[snafu(display("Can not cast `{count}` ticks of `{from}` into `{to}`, the result overflows"))]
    Overflow {
        count: String,
        from: String,
        to: String,
    },
    #[snafu(display("Duration arithmetic `{lhs} {op} {rhs}` overflows"))]
    Arithmetic {
        lhs: String,
        op: char,
        rhs: String,
        source: TickOverflowError,
    },
}

/// Result type of the chronal
pub type Result<T> = std::result::Result<T, DurationError>;
