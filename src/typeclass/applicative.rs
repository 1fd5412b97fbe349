//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine independent values using a function (`map2`, `map3`)
//! - Pair values up (`product`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::optional::Optional;
//! use optio::typeclass::Applicative;
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert!(x.has_value(&42));
//!
//! let sum = Optional::<i32>::of(1).map2(Optional::<i32>::of(2), |a, b| a + b);
//! assert!(sum.has_value(&3));
//! ```

use super::functor::Functor;
use crate::optional::Optional;

/// A type class for types that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The function is only called when both sides hold a value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two applicatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Applicative;
    ///
    /// let pair = Optional::<i32>::of(1).product(Optional::<&str>::of("one"));
    /// assert_eq!(pair.unwrap(), (1, "one"));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring the right one to be present too.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring the left one to be present too.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use optio::typeclass::Applicative;
    ///
    /// let function: Optional<fn(i32) -> i32> = Optional::Some(|n| n + 1);
    /// assert!(function.apply(Optional::<i32>::of(5)).has_value(&6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(function(a, b)),
            _ => Optional::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => {
                Optional::Some(function(a, b, c))
            }
            _ => Optional::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
