//! Handler pair for [`Optional::match_with`](super::Optional::match_with).

/// A pair of handlers, one per `Optional` variant.
///
/// `some` receives the held value; `none` receives nothing. Both must
/// produce the same result type.
///
/// # Examples
///
/// ```rust
/// use optio::optional::{Match, Optional};
///
/// let tripled = Optional::<i32>::none().match_with(Match {
///     some: |value: i32| value * 3,
///     none: || 0,
/// });
/// assert_eq!(tripled, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Match<S, N> {
    /// Invoked with the held value of a `Some`.
    pub some: S,
    /// Invoked for a `None`.
    pub none: N,
}

impl<S, N> Match<S, N> {
    /// Creates a handler pair.
    #[inline]
    pub const fn new(some: S, none: N) -> Self {
        Self { some, none }
    }
}
