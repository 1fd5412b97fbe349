//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] records the applied type (`Inner`) and how to re-apply
//! the same constructor to another type (`WithType<B>`), which is enough to
//! state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use optio::optional::Optional;
//! use optio::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let label: Optional<String> = emptied(Optional::<i32>::of(42));
//! assert!(label.is_none());
//! ```

use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Optional<i32>`, `WithType<String>` is `Optional<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}
