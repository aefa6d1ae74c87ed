//! Display a duration as its tick count followed by the unit of the period

use std::fmt::{self, Display};

use num_period::{Period, Representation};

use super::Duration;

/// Unit suffix of the period with value `num/den` seconds
enum Suffix {
    Named(&'static str),
    Whole(i64),
    Fraction(i64, i64),
}

impl Suffix {
    const fn of(num: i64, den: i64) -> Self {
        match (num, den) {
            (1, 1_000_000_000) => Self::Named("ns"),
            (1, 1_000_000) => Self::Named("µs"),
            (1, 1_000) => Self::Named("ms"),
            (1, 100) => Self::Named("cs"),
            (1, 10) => Self::Named("ds"),
            (1, 1) => Self::Named("s"),
            (60, 1) => Self::Named("min"),
            (3_600, 1) => Self::Named("h"),
            (86_400, 1) => Self::Named("d"),
            (num, 1) => Self::Whole(num),
            (num, den) => Self::Fraction(num, den),
        }
    }
}

impl Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Whole(num) => write!(f, "[{num}]s"),
            Self::Fraction(num, den) => write!(f, "[{num}/{den}]s"),
        }
    }
}

impl<R: Representation, P: Period> Display for Duration<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, Suffix::of(P::NUM, P::DEN))
    }
}
