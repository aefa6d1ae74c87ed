#![warn(clippy::todo)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::private_intra_doc_links,
    rust_2018_idioms,
    missing_docs,
    clippy::needless_borrow,
    clippy::redundant_clone,
    missing_debug_implementations
)]

//! # Chronal
//!
//! `Chronal` is a duration type and an operation classification layer whose rules
//! are all decided by the compiler:
//!
//! - [`duration::Duration`] combines durations of different representations and
//!   periods through the common type computed by `num_period`. Conversions that
//!   would silently lose precision do not compile
//!
//! - [`numeric`] contains the integer domain functions, they only accept
//!   [`Integral`](num_period::Integral) operands
//!
//! - [`functional`] classifies operation variants: which of them are commutative
//!   and which of them are transparent. Parallel algorithms consult these facts
//!   before reordering operands

#[cfg(test)]
extern crate self as chronal;

pub mod duration;
pub mod error;
pub mod functional;
pub mod numeric;

pub use chronal_procedural_macro::TransparentFunctor;
pub use num_period;

mod private {
    /// Sealed trait protect against downstream implementations
    pub trait Sealed {}
}
