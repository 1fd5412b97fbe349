//! Shallow equality for values held by an `Optional`.
//!
//! `Optional::equals` and `Optional::has_value` never compare structures.
//! Scalars and strings compare by value; shared handles compare by
//! identity. A reference compares like the value it points to, so `&str`
//! compares by value and `&Rc<T>` by allocation. Two `Rc`s holding equal
//! structures are therefore different values unless they point at the same
//! allocation.
//!
//! # Examples
//!
//! ```rust
//! use optio::optional::ShallowEq;
//! use std::rc::Rc;
//!
//! assert!(1_i32.shallow_eq(&1));
//!
//! let shared = Rc::new(vec![1, 2, 3]);
//! assert!(shared.shallow_eq(&Rc::clone(&shared)));
//! assert!(!shared.shallow_eq(&Rc::new(vec![1, 2, 3])));
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Equality without deep structural comparison.
///
/// Implementations must be symmetric. They need not be reflexive: floats
/// follow IEEE semantics, so `NaN` is never shallow-equal to itself.
pub trait ShallowEq {
    /// Returns `true` if `self` and `other` are the same value under shallow
    /// (identity-style) equality.
    fn shallow_eq(&self, other: &Self) -> bool;
}

/// Implements [`ShallowEq`] by delegating to `PartialEq`.
///
/// Use this for value-like types (ids, small `Copy` records) whose
/// `PartialEq` is already cheap and identity-free.
///
/// # Examples
///
/// ```rust
/// use optio::optional::Optional;
/// use optio::shallow_eq_by_value;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct UserId(u64);
///
/// shallow_eq_by_value!(UserId);
///
/// assert!(Optional::<UserId>::of(UserId(7)).has_value(&UserId(7)));
/// ```
#[macro_export]
macro_rules! shallow_eq_by_value {
    ($($value_type:ty),+ $(,)?) => {
        $(
            impl $crate::optional::ShallowEq for $value_type {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

shallow_eq_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    str,
);

impl<T: ShallowEq + ?Sized> ShallowEq for &T {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

impl<T: ?Sized> ShallowEq for Rc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ShallowEq for Arc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}
