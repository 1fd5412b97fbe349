//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::optional::Optional;
//! use optio::typeclass::Functor;
//!
//! let some_value = Optional::<i32>::of(5);
//! let transformed: Optional<String> = some_value.fmap(|n| n.to_string());
//! assert!(transformed.has_value(&"5".to_string()));
//!
//! // None is preserved
//! let none_value = Optional::<i32>::none();
//! assert!(none_value.fmap(|n| n.to_string()).is_none());
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` must not call its function when there is nothing to map over.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Functor;
    ///
    /// let x = Optional::<i32>::of(5);
    /// assert!(x.fmap(|n| n * 2).has_value(&10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Functor;
    ///
    /// let x = Optional::<String>::of("hello".to_string());
    /// assert!(x.fmap_ref(|s| s.len()).has_value(&5));
    /// // x is still available here
    /// assert!(x.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Functor;
    ///
    /// assert!(Optional::<i32>::of(5).void().has_value(&()));
    /// assert!(Optional::<i32>::none().void().is_none());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
