//! Operation classification for the algorithms that reorder operands
//!
//! - [`BinaryOperation`] records the kind and the operand type of each functor,
//!   [`is_commutative`] and [`is_commutative!`](crate::is_commutative) derive the
//!   commutativity from them
//!
//! - [`TransparentFunctor`] marks the functors that deduce their operand types,
//!   [`is_transparent!`](crate::is_transparent) detects the marker

mod functors;
mod operation;
mod transparent;

pub use functors::{
    BinaryFunctor, BitAnd, BitNot, BitOr, BitXor, Deduced, Divides, LogicalAnd, LogicalOr,
    Maximum, Minimum, Minus, Modulus, Multiplies, Plus, UnaryFunctor,
};
pub use operation::{BinaryOperation, OperationKind, is_commutative};
pub use transparent::TransparentFunctor;

#[doc(hidden)]
pub use transparent::detect as __private;
