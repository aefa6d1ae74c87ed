//! Algebraic properties of the binary operations
//!
//! Reordering the operands of a reduction is only legal when the operation is
//! commutative. The answer depends on both the operation and the operand type:
//! `Plus<i32>` is commutative while `Plus<String>` concatenates and is not.

use std::fmt::Display;

use crate::private::Sealed;

/// Tag of the operation a functor family performs. The set is closed
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `lhs + rhs`
    Add,
    /// `lhs * rhs`
    Multiply,
    /// Smaller operand
    Min,
    /// Larger operand
    Max,
    /// `lhs || rhs`
    LogicalOr,
    /// `lhs && rhs`
    LogicalAnd,
    /// `lhs | rhs`
    BitOr,
    /// `lhs & rhs`
    BitAnd,
    /// `lhs ^ rhs`
    BitXor,
    /// `lhs - rhs`
    Subtract,
    /// `lhs / rhs`
    Divide,
    /// `lhs % rhs`
    Modulus,
    /// `!value`, the only unary operation
    BitNot,
}

impl OperationKind {
    /// Is the operation commutative when the operands are arithmetic?
    #[inline]
    pub const fn is_commutative(self) -> bool {
        match self {
            Self::Add
            | Self::Multiply
            | Self::Min
            | Self::Max
            | Self::LogicalOr
            | Self::LogicalAnd
            | Self::BitOr
            | Self::BitAnd
            | Self::BitXor => true,
            Self::Subtract | Self::Divide | Self::Modulus | Self::BitNot => false,
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OperationKind::{:?}", self)
    }
}

/// Binary operation with a known kind and operand type. This trait is sealed: it
/// is implemented for the functor families over each arithmetic operand type and
/// for their transparent forms
pub trait BinaryOperation: Sealed {
    /// Kind of the operation
    const KIND: OperationKind;

    /// Type of the operands
    type Operand;

    /// Is the operand type arithmetic? Transparent forms do not know their operand
    /// type, they answer `false`
    const IS_ARITHMETIC_OPERAND: bool;

    /// Is it legal to swap the operands?
    const IS_COMMUTATIVE: bool = Self::KIND.is_commutative() && Self::IS_ARITHMETIC_OPERAND;
}

/// Is the operation `F` commutative?
///
/// Types without a [`BinaryOperation`] implementation are rejected while compiling,
/// use [`is_commutative!`](crate::is_commutative) to ask about arbitrary types
#[inline]
pub const fn is_commutative<F: BinaryOperation>() -> bool {
    F::IS_COMMUTATIVE
}

/// Is the operation commutative? Accepts any type: types that are not a known
/// [`BinaryOperation`](crate::functional::BinaryOperation) answer `false`
///
/// ```
/// use chronal::functional::{Minus, Plus};
///
/// assert!(chronal::is_commutative!(Plus<i32>));
/// assert!(!chronal::is_commutative!(Minus<i32>));
/// assert!(!chronal::is_commutative!(Plus<String>));
/// assert!(!chronal::is_commutative!(Vec<u8>));
/// ```
#[macro_export]
macro_rules! is_commutative {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::functional::__private::{CommutativeFallback as _, ViaBinaryOperation as _};
        (&&$crate::functional::__private::Witness::<$ty>::new()).detect_commutative()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::*;

    const _: () = assert!(is_commutative::<Plus<i32>>());
    const _: () = assert!(!is_commutative::<Minus<i32>>());
    const _: () = assert!(!is_commutative::<Plus>());

    #[allow(dead_code)]
    struct Concat;

    #[test]
    fn test_kind_is_commutative() {
        let commutative = [
            OperationKind::Add,
            OperationKind::Multiply,
            OperationKind::Min,
            OperationKind::Max,
            OperationKind::LogicalOr,
            OperationKind::LogicalAnd,
            OperationKind::BitOr,
            OperationKind::BitAnd,
            OperationKind::BitXor,
        ];
        assert!(commutative.iter().all(|kind| kind.is_commutative()));

        let non_commutative = [
            OperationKind::Subtract,
            OperationKind::Divide,
            OperationKind::Modulus,
            OperationKind::BitNot,
        ];
        assert!(non_commutative.iter().all(|kind| !kind.is_commutative()));

        assert_eq!(OperationKind::BitXor.to_string(), "OperationKind::BitXor");
    }

    #[test]
    fn test_commutative_families_over_arithmetic_operands() {
        assert!(is_commutative::<Plus<i32>>());
        assert!(is_commutative::<Plus<f64>>());
        assert!(is_commutative::<Plus<bool>>());
        assert!(is_commutative::<Multiplies<u128>>());
        assert!(is_commutative::<Minimum<i8>>());
        assert!(is_commutative::<Maximum<f32>>());
        assert!(is_commutative::<LogicalOr<bool>>());
        assert!(is_commutative::<LogicalAnd<u8>>());
        assert!(is_commutative::<BitOr<i64>>());
        assert!(is_commutative::<BitAnd<u16>>());
        assert!(is_commutative::<BitXor<i128>>());
        // Classification does not require the call to exist
        assert!(is_commutative::<BitAnd<f32>>());
    }

    #[test]
    fn test_non_commutative() {
        assert!(!is_commutative::<Minus<i32>>());
        assert!(!is_commutative::<Divides<f64>>());
        assert!(!is_commutative::<Modulus<u8>>());

        // Transparent forms do not know their operands
        assert!(!is_commutative::<Plus>());
        assert!(!is_commutative::<BitXor<Deduced>>());
        assert_eq!(<Minimum as BinaryOperation>::KIND, OperationKind::Min);
    }

    #[test]
    fn test_detection_macro() {
        assert!(crate::is_commutative!(Plus<i32>));
        assert!(crate::is_commutative!(Maximum<u64>));
        assert!(!crate::is_commutative!(Plus<String>));
        assert!(!crate::is_commutative!(Multiplies<crate::duration::Seconds>));
        assert!(!crate::is_commutative!(Minus<i32>));
        assert!(!crate::is_commutative!(Plus));
        assert!(!crate::is_commutative!(BitNot<i32>));
        assert!(!crate::is_commutative!(Concat));
    }
}
