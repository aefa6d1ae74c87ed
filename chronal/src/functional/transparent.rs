//! Transparent functor marker
//!
//! A functor is transparent when it deduces its operand types at the call site.
//! Consumers detect the marker with [`is_transparent!`](crate::is_transparent),
//! which never fails to compile: types without the marker answer `false`.

/// Marker implemented by transparent functors. Only the presence of the
/// implementation matters, `IsTransparent` carries no information.
///
/// User functors opt in with `#[derive(TransparentFunctor)]`:
///
/// ```
/// use chronal::TransparentFunctor;
///
/// #[derive(TransparentFunctor)]
/// struct Concat;
///
/// assert!(chronal::is_transparent!(Concat));
/// ```
pub trait TransparentFunctor {
    /// Witness of the marker
    type IsTransparent;
}

/// Does the type carry the [`TransparentFunctor`](crate::functional::TransparentFunctor)
/// marker?
///
/// ```
/// use chronal::functional::BitAnd;
///
/// assert!(chronal::is_transparent!(BitAnd));
/// assert!(!chronal::is_transparent!(BitAnd<i32>));
/// ```
#[macro_export]
macro_rules! is_transparent {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::functional::__private::{TransparentFallback as _, ViaTransparentFunctor as _};
        (&&$crate::functional::__private::Witness::<$ty>::new()).detect_transparent()
    }};
}

/// Dispatch of the detection macros. The macros call the detection methods on
/// `&&Witness<T>`: method resolution picks the implementation for `&Witness<T>` when
/// its bound holds and falls back to the one for `Witness<T>` otherwise
#[doc(hidden)]
pub mod detect {
    use std::fmt::{self, Debug};
    use std::marker::PhantomData;

    use super::TransparentFunctor;
    use crate::functional::operation::BinaryOperation;

    /// Zero sized stand-in of `T`
    pub struct Witness<T: ?Sized>(PhantomData<fn() -> *const T>);

    impl<T: ?Sized> Witness<T> {
        /// Create the witness
        #[inline]
        pub const fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<T: ?Sized> Default for Witness<T> {
        #[inline]
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T: ?Sized> Debug for Witness<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Witness<{}>", std::any::type_name::<T>())
        }
    }

    /// Selected when `T` is a [`BinaryOperation`]
    pub trait ViaBinaryOperation {
        /// Commutativity of `T`
        fn detect_commutative(&self) -> bool;
    }

    impl<T: BinaryOperation> ViaBinaryOperation for &Witness<T> {
        #[inline]
        fn detect_commutative(&self) -> bool {
            T::IS_COMMUTATIVE
        }
    }

    /// Selected for all of the other types
    pub trait CommutativeFallback {
        /// Always `false`
        fn detect_commutative(&self) -> bool;
    }

    impl<T: ?Sized> CommutativeFallback for Witness<T> {
        #[inline]
        fn detect_commutative(&self) -> bool {
            false
        }
    }

    /// Selected when `T` is a [`TransparentFunctor`]
    pub trait ViaTransparentFunctor {
        /// Always `true`
        fn detect_transparent(&self) -> bool;
    }

    impl<T: TransparentFunctor + ?Sized> ViaTransparentFunctor for &Witness<T> {
        #[inline]
        fn detect_transparent(&self) -> bool {
            true
        }
    }

    /// Selected for all of the other types
    pub trait TransparentFallback {
        /// Always `false`
        fn detect_transparent(&self) -> bool;
    }

    impl<T: ?Sized> TransparentFallback for Witness<T> {
        #[inline]
        fn detect_transparent(&self) -> bool {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TransparentFunctor;
    use crate::functional::*;

    #[allow(dead_code)]
    #[derive(TransparentFunctor)]
    struct Joiner<T>(std::marker::PhantomData<T>);

    #[allow(dead_code)]
    struct Opaque;

    #[test]
    fn test_bitwise_functors() {
        assert!(!crate::is_transparent!(BitAnd<i32>));
        assert!(crate::is_transparent!(BitAnd<Deduced>));
        assert!(crate::is_transparent!(BitAnd));

        assert!(!crate::is_transparent!(BitOr<i32>));
        assert!(crate::is_transparent!(BitOr<Deduced>));
        assert!(crate::is_transparent!(BitOr));

        assert!(!crate::is_transparent!(BitXor<i32>));
        assert!(crate::is_transparent!(BitXor<Deduced>));
        assert!(crate::is_transparent!(BitXor));

        assert!(!crate::is_transparent!(BitNot<i32>));
        assert!(crate::is_transparent!(BitNot<Deduced>));
        assert!(crate::is_transparent!(BitNot));

        assert!(!crate::is_transparent!(BitAnd<String>));
    }

    #[test]
    fn test_other_types() {
        assert!(crate::is_transparent!(Plus));
        assert!(!crate::is_transparent!(Minimum<f64>));
        assert!(crate::is_transparent!(Joiner<u8>));
        assert!(!crate::is_transparent!(Opaque));
        assert!(!crate::is_transparent!(str));
    }
}
