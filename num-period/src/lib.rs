//! # NumPeriod
//!
//! `NumPeriod` holds the type algebra that `chronal` builds its durations on:
//!
//! - [`rep`]: the closed set of numeric representations that can count ticks,
//!   their kind markers and the promotion table that decides the common
//!   representation of two of them
//!
//! - [`ratio`]: compile-time rational numbers used as the period of a tick and the
//!   rule that decides the common period of two of them
//!
//! Periods besides the named ones are declared with [`define_period!`], their
//! common periods are registered with [`impl_common_period!`].
//!
//! Everything here is resolved while compiling. A combination that has no common
//! type simply has no trait implementation, and a ratio that breaks its invariants
//! fails the const evaluation of its associated constants

pub mod error;
mod macros;
pub mod ratio;
pub mod rep;

pub use ratio::{CommonPeriod, Period, Ratio, RatioValue};
pub use rep::{Arithmetic, CommonRep, Floating, Integral, RepKind, Representation};

mod private {
    /// Sealed trait protect against downstream implementations
    pub trait Sealed {}
}

/// Used by the exported macros, not part of the public API
#[doc(hidden)]
pub mod __private {
    /// Seal of [`Period`](crate::Period). [`define_period!`](crate::define_period)
    /// is the only intended implementor outside of this crate
    pub trait PeriodSealed {}
}
