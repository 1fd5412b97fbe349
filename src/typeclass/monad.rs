//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` extends `Applicative` with `flat_map`: each step may depend on
//! the previous step's value and may itself produce no value.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::optional::Optional;
//! use optio::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::<i32>::of(text.parse::<i32>().ok()).filter(|number| *number > 0)
//! }
//!
//! let result = Monad::flat_map(Optional::<&str>::of("42"), parse_positive)
//!     .and_then(|number| Optional::<i32>::of(number * 2));
//! assert!(result.has_value(&84));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for sequencing dependent computations.
pub trait Monad: Applicative {
    /// Sequences a computation that depends on the held value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Monad;
    ///
    /// assert!(Optional::<i32>::of(1).then(Optional::<&str>::of("next")).is_some());
    /// assert!(Optional::<i32>::none().then(Optional::<&str>::of("next")).is_none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        // Delegate to the inherent combinator
        Self::flat_map(self, function)
    }
}
