//! Error in num-period

use snafu::Snafu;

use crate::rep::RepKind;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RatioError {
    #[snafu(display("Ratio `{num}/0` has a zero denominator"))]
    ZeroDenominator { num: i64 },
    #[snafu(display(
        "Ratio `{num}/{den}` can not be normalized, `i64::MIN` has no positive counterpart"
    ))]
    Overflow { num: i64, den: i64 },
}

/// Overflow of the tick arithmetic
#[derive(Debug, Snafu)]
#[snafu(
    display("Tick overflow: `{lhs} {op} {rhs}` overflows `{}`", kind.type_name()),
    visibility(pub(crate))
)]
pub struct TickOverflowError {
    lhs: String,
    op: char,
    rhs: String,
    kind: RepKind,
}

impl TickOverflowError {
    /// Representation the operation overflows
    #[inline]
    pub fn kind(&self) -> RepKind {
        self.kind
    }
}

/// Result type of the num-period
pub type Result<T, E = RatioError> = std::result::Result<T, E>;
