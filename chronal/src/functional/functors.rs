//! Functor families
//!
//! Every family is generic over its operand type: `Plus<i32>` adds two `i32`.
//! Omitting the operand type gives the transparent form, `Plus` (that is
//! `Plus<Deduced>`), which deduces the operand types from the call site and may
//! combine heterogeneous operands.

use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops;

use num_period::Arithmetic;

use super::operation::{BinaryOperation, OperationKind};
use super::transparent::TransparentFunctor;
use crate::private::Sealed;

/// Operand type of the transparent functors: the operand types are deduced at the
/// call site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deduced;

/// Functor that accepts two operands
pub trait BinaryFunctor<L, R = L> {
    /// Result of the call
    type Output;

    /// Apply the operation
    fn call(&self, lhs: L, rhs: R) -> Self::Output;
}

/// Functor that accepts a single operand
pub trait UnaryFunctor<T> {
    /// Result of the call
    type Output;

    /// Apply the operation
    fn call(&self, value: T) -> Self::Output;
}

macro_rules! for_all_families {
    ($macro:ident) => {
        $macro! {
            {Plus, "Addition: `lhs + rhs`"},
            {Minus, "Subtraction: `lhs - rhs`"},
            {Multiplies, "Multiplication: `lhs * rhs`"},
            {Divides, "Division: `lhs / rhs`"},
            {Modulus, "Remainder: `lhs % rhs`"},
            {Minimum, "Smaller operand, `lhs` when they are equal"},
            {Maximum, "Larger operand, `lhs` when they are equal"},
            {LogicalOr, "Logical disjunction of two `bool`"},
            {LogicalAnd, "Logical conjunction of two `bool`"},
            {BitOr, "Bitwise or: `lhs | rhs`"},
            {BitAnd, "Bitwise and: `lhs & rhs`"},
            {BitXor, "Bitwise xor: `lhs ^ rhs`"},
            {BitNot, "Bitwise not: `!value`"}
        }
    };
}

macro_rules! define_family {
    ($({$family:ident, $doc:literal}),+) => {
        $(
            #[doc = $doc]
            pub struct $family<T = Deduced>(PhantomData<fn() -> T>);

            impl<T> $family<T> {
                /// Create the functor
                #[inline]
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T> Default for $family<T> {
                #[inline]
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T> Clone for $family<T> {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $family<T> {}

            impl<T> Debug for $family<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}<{}>", stringify!($family), std::any::type_name::<T>())
                }
            }

            impl<T> Sealed for $family<T> {}

            impl TransparentFunctor for $family<Deduced> {
                type IsTransparent = ();
            }
        )+
    };
}

for_all_families!(define_family);

macro_rules! impl_std_operator {
    ($({$family:ident, $op:ident, $method:ident}),+) => {
        $(
            impl<T: ops::$op<Output = T>> BinaryFunctor<T> for $family<T> {
                type Output = T;

                #[inline]
                fn call(&self, lhs: T, rhs: T) -> T {
                    ops::$op::$method(lhs, rhs)
                }
            }

            impl<L: ops::$op<R>, R> BinaryFunctor<L, R> for $family<Deduced> {
                type Output = L::Output;

                #[inline]
                fn call(&self, lhs: L, rhs: R) -> L::Output {
                    ops::$op::$method(lhs, rhs)
                }
            }
        )+
    };
}

impl_std_operator! {
    {Plus, Add, add},
    {Minus, Sub, sub},
    {Multiplies, Mul, mul},
    {Divides, Div, div},
    {Modulus, Rem, rem},
    {BitOr, BitOr, bitor},
    {BitAnd, BitAnd, bitand},
    {BitXor, BitXor, bitxor}
}

macro_rules! impl_extremum {
    ($({$family:ident, $pick_rhs:tt}),+) => {
        $(
            impl<T: PartialOrd> BinaryFunctor<T> for $family<T> {
                type Output = T;

                #[inline]
                fn call(&self, lhs: T, rhs: T) -> T {
                    if rhs $pick_rhs lhs { rhs } else { lhs }
                }
            }

            impl<T: PartialOrd> BinaryFunctor<T> for $family<Deduced> {
                type Output = T;

                #[inline]
                fn call(&self, lhs: T, rhs: T) -> T {
                    if rhs $pick_rhs lhs { rhs } else { lhs }
                }
            }
        )+
    };
}

impl_extremum!({Minimum, <}, {Maximum, >});

macro_rules! impl_logical {
    ($({$family:ident, $op:tt}),+) => {
        $(
            impl BinaryFunctor<bool> for $family<bool> {
                type Output = bool;

                #[inline]
                fn call(&self, lhs: bool, rhs: bool) -> bool {
                    lhs $op rhs
                }
            }

            impl BinaryFunctor<bool> for $family<Deduced> {
                type Output = bool;

                #[inline]
                fn call(&self, lhs: bool, rhs: bool) -> bool {
                    lhs $op rhs
                }
            }
        )+
    };
}

impl_logical!({LogicalOr, ||}, {LogicalAnd, &&});

impl<T: ops::Not<Output = T>> UnaryFunctor<T> for BitNot<T> {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        !value
    }
}

impl<T: ops::Not> UnaryFunctor<T> for BitNot<Deduced> {
    type Output = T::Output;

    #[inline]
    fn call(&self, value: T) -> T::Output {
        !value
    }
}

macro_rules! impl_binary_operation {
    ($({$family:ident, $kind:ident}),+) => {
        $(
            impl<T: Arithmetic> BinaryOperation for $family<T> {
                const KIND: OperationKind = OperationKind::$kind;
                type Operand = T;
                const IS_ARITHMETIC_OPERAND: bool = true;
            }

            impl BinaryOperation for $family<Deduced> {
                const KIND: OperationKind = OperationKind::$kind;
                type Operand = Deduced;
                const IS_ARITHMETIC_OPERAND: bool = false;
            }
        )+
    };
}

impl_binary_operation! {
    {Plus, Add},
    {Minus, Subtract},
    {Multiplies, Multiply},
    {Divides, Divide},
    {Modulus, Modulus},
    {Minimum, Min},
    {Maximum, Max},
    {LogicalOr, LogicalOr},
    {LogicalAnd, LogicalAnd},
    {BitOr, BitOr},
    {BitAnd, BitAnd},
    {BitXor, BitXor}
}
