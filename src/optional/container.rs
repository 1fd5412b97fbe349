//! The `Optional<T>` sum type and its combinators.

use std::borrow::Cow;
use std::fmt;

use super::error::{AbsentValueError, ConstructionError, UNWRAP_NONE_MESSAGE};
use super::matcher::Match;
use super::shallow::ShallowEq;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Optional<T>` is a closed sum type: pattern matching on it is exhaustive
/// and no third variant exists. `None` carries no data and therefore fits
/// any `Optional<T>` the context asks for.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use optio::optional::Optional;
///
/// fn parse_port(raw: &str) -> Optional<u16> {
///     Optional::of(raw.parse::<u16>().ok())
/// }
///
/// assert_eq!(parse_port("8080").unwrap_or(80), 8080);
/// assert_eq!(parse_port("http").unwrap_or(80), 80);
/// ```
#[derive(Clone, Copy)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<std::sync::Arc<String>>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Optional` from a possibly-absent value.
    ///
    /// A bare `T` is always present; a native `Option<T>` maps `None` to
    /// `None`. This is the only place the native absence sentinel is inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert!(Optional::<i32>::of(1).is_some());
    /// assert!(Optional::<i32>::of(None).is_none());
    /// assert!(Optional::<i32>::of(Some(1)).has_value(&1));
    /// ```
    #[inline]
    pub fn of(value: impl Into<Option<T>>) -> Self {
        match value.into() {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Builds a `Some`, asserting that `value` is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::AbsentSome`] if `value` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::{ConstructionError, Optional};
    ///
    /// assert_eq!(Optional::<i32>::some(1).map(Optional::unwrap), Ok(1));
    /// assert_eq!(
    ///     Optional::<i32>::some(None).map(Optional::unwrap),
    ///     Err(ConstructionError::AbsentSome)
    /// );
    /// ```
    #[inline]
    pub fn some(value: impl Into<Option<T>>) -> Result<Self, ConstructionError> {
        value
            .into()
            .map(Self::Some)
            .ok_or(ConstructionError::AbsentSome)
    }

    /// Returns a `None`.
    ///
    /// The type parameter is free, so the result can be handed to any code
    /// expecting an `Optional<T>`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Builds a `None`, asserting that `value` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::PresentNone`] if `value` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::{ConstructionError, Optional};
    ///
    /// assert!(Optional::<i32>::try_none(None).is_ok_and(|none| none.is_none()));
    /// assert_eq!(
    ///     Optional::<i32>::try_none(3).map(|none| none.is_none()),
    ///     Err(ConstructionError::PresentNone)
    /// );
    /// ```
    #[inline]
    pub fn try_none(value: impl Into<Option<T>>) -> Result<Self, ConstructionError> {
        match value.into() {
            Some(_) => Err(ConstructionError::PresentNone),
            None => Ok(Self::None),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert!(Optional::<i32>::of(1).is_some());
    /// assert!(!Optional::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert!(Optional::<i32>::none().is_none());
    /// assert!(!Optional::<i32>::of(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the predicate's verdict on the held value, or `false` for a
    /// `None` without calling the predicate.
    ///
    /// Unlike [`has_value`](Self::has_value), which tests equality to a
    /// given value, this tests an arbitrary condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let one = Optional::<i32>::of(1);
    /// assert!(one.contains(|value| *value > 0));
    /// assert!(!one.contains(|value| *value < 0));
    /// assert!(!Optional::<i32>::none().contains(|_| true));
    /// ```
    #[inline]
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Borrows the held value, producing an `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let name = Optional::<String>::of("ferris".to_string());
    /// assert_eq!(name.as_ref().map(|value| value.len()).unwrap_or(0), 6);
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into the native `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::of(1).expect("a value was just stored"), 1);
    /// ```
    ///
    /// ```should_panic
    /// use optio::optional::Optional;
    ///
    /// Optional::<i32>::none().expect("no user id in session");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `"Called unwrap on a None value."` if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<&str>::of("held").unwrap(), "held");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{UNWRAP_NONE_MESSAGE}"),
        }
    }

    /// Returns the held value, or an [`AbsentValueError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `None`.
    #[inline]
    pub fn try_expect(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, AbsentValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AbsentValueError::new(message)),
        }
    }

    /// Returns the held value, or the [`AbsentValueError`] `unwrap` would
    /// have panicked with.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::{AbsentValueError, Optional};
    ///
    /// assert_eq!(Optional::<i32>::of(5).try_unwrap(), Ok(5));
    /// assert_eq!(
    ///     Optional::<i32>::none().try_unwrap(),
    ///     Err(AbsentValueError::unwrap_none())
    /// );
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AbsentValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AbsentValueError::unwrap_none()),
        }
    }

    /// Returns the held value, or `fallback` for a `None`.
    ///
    /// `fallback` is evaluated eagerly; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for an expensive fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::of(1).unwrap_or(2), 1);
    /// assert_eq!(Optional::<i32>::of(None).unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the held value, or the result of `producer` for a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::of(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(Optional::<i32>::none().unwrap_or_else(|| 3), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => producer(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// Returns `Some(function(value))` for a `Some`; a `None` stays `None`
    /// and `function` is not called.
    ///
    /// The result of a `Some` is always a `Some`, even when `U` is itself an
    /// `Option`: a function returning `None` yields `Some(None)`. To have an
    /// absent result collapse to `None`, use [`filter_map`](Self::filter_map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let two = Optional::<i32>::of(1).map(|value| value * 2);
    /// assert_eq!(two.unwrap(), 2);
    ///
    /// let none = Optional::<i32>::none().map(|value| value * 2);
    /// assert!(none.is_none());
    ///
    /// // `map` keeps an absent result wrapped; `filter_map` collapses it.
    /// let wrapped = Optional::<i32>::of(1).map(|_| None::<i32>);
    /// assert_eq!(wrapped.unwrap(), None);
    /// let collapsed = Optional::<i32>::of(1).filter_map(|_| None::<i32>);
    /// assert!(collapsed.is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Applies a function that may yield no value, collapsing to `None`
    /// when it does.
    ///
    /// For a `Some(value)` this is `Optional::of(function(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let raw = Optional::<&str>::of("42");
    /// assert!(raw.filter_map(|text| text.parse::<i32>().ok()).has_value(&42));
    ///
    /// let garbage = Optional::<&str>::of("forty-two");
    /// assert!(garbage.filter_map(|text| text.parse::<i32>().ok()).is_none());
    /// ```
    #[inline]
    pub fn filter_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => Optional::<U>::of(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Returns `function(value)` for a `Some`, or `fallback` for a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::of(1).map_or(3, |value| value * 2), 2);
    /// assert_eq!(Optional::<i32>::none().map_or(7, |value| value * 2), 7);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => fallback,
        }
    }

    /// Returns `function(value)` for a `Some`, or `fallback()` for a `None`.
    ///
    /// Exactly one of the two functions is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert_eq!(Optional::<i32>::of(1).map_or_else(|| 3, |value| value * 2), 2);
    /// assert_eq!(Optional::<i32>::none().map_or_else(|| 7, |value| value * 2), 7);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => fallback(),
        }
    }

    /// Returns `other` if this is a `Some`, otherwise `None`.
    ///
    /// `other` is an already-built value; this only decides whether it is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let two = Optional::<i32>::of(1).and(Optional::<&str>::of("two"));
    /// assert_eq!(two.unwrap(), "two");
    ///
    /// let none = Optional::<i32>::none().and(Optional::<i32>::of(2));
    /// assert!(none.is_none());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// Returns `function(value)` for a `Some`; a `None` stays `None` and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let square = |value: i32| Optional::<i32>::of(value * value);
    ///
    /// let sixteen = Optional::<i32>::of(2).flat_map(square).flat_map(square);
    /// assert_eq!(sixteen.unwrap(), 16);
    ///
    /// let nothing = Optional::<i32>::of(2)
    ///     .flat_map(|_| Optional::<i32>::none())
    ///     .flat_map(square);
    /// assert!(nothing.is_none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Returns `self` if it is a `Some`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let one = Optional::<i32>::of(1);
    /// assert_eq!(one.or(Optional::of(2)).unwrap(), 1);
    /// assert_eq!(Optional::none().or(one).unwrap(), 1);
    /// ```
    ///
    /// Both sides must hold the same type:
    ///
    /// ```compile_fail
    /// use optio::optional::Optional;
    ///
    /// let mixed = Optional::<i32>::none().or(Optional::<&str>::of("text"));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it is a `Some`, otherwise the result of `producer`.
    ///
    /// `producer` is not called for a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let fallback = Optional::<String>::none().or_else(|| Optional::of("foobar".to_string()));
    /// assert_eq!(fallback.unwrap(), "foobar");
    /// ```
    #[inline]
    pub fn or_else<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => producer(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// Returns `self` unchanged when it is a `Some` whose value satisfies
    /// `predicate`; otherwise a `None`. The predicate is not called for a
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert!(Optional::<i32>::of(1).filter(|value| *value > 0).has_value(&1));
    /// assert!(Optional::<i32>::of(1).filter(|value| *value < 0).is_none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Calls `function` with the held value for its side effect.
    ///
    /// Does nothing for a `None`. To compute a result, use
    /// [`match_with`](Self::match_with) instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// let mut seen = 0;
    /// Optional::<i32>::of(1).for_each(|value| seen = *value);
    /// assert_eq!(seen, 1);
    /// ```
    #[inline]
    pub fn for_each<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            function(value);
        }
    }

    /// Destructures the `Optional`, invoking exactly one handler.
    ///
    /// `handlers.some` receives the held value of a `Some`; `handlers.none`
    /// is called for a `None`. The other handler is dropped uncalled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::{Match, Optional};
    ///
    /// let doubled = Optional::<i32>::of(1).match_with(Match {
    ///     some: |value: i32| value * 2,
    ///     none: || 0,
    /// });
    /// assert_eq!(doubled, 2);
    /// ```
    ///
    /// Both handlers are required:
    ///
    /// ```compile_fail
    /// use optio::optional::{Match, Optional};
    ///
    /// let doubled = Optional::<i32>::of(1).match_with(Match {
    ///     some: |value: i32| value * 2,
    /// });
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, handlers: Match<S, N>) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => (handlers.some)(value),
            Self::None => (handlers.none)(),
        }
    }
}

// =============================================================================
// Shallow Equality
// =============================================================================

impl<T: ShallowEq> Optional<T> {
    /// Compares two `Optional`s without deep comparison.
    ///
    /// Two `None`s are equal; a `Some` never equals a `None`; two `Some`s are
    /// equal iff their values are [shallow-equal](ShallowEq).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    /// use std::rc::Rc;
    ///
    /// assert!(Optional::<i32>::of(1).equals(&Optional::of(1)));
    /// assert!(Optional::<i32>::none().equals(&Optional::none()));
    ///
    /// // Structurally equal, but different allocations.
    /// let first = Optional::<Rc<&str>>::of(Rc::new("bar"));
    /// let second = Optional::<Rc<&str>>::of(Rc::new("bar"));
    /// assert!(!first.equals(&second));
    /// assert!(first.equals(&first.clone()));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.shallow_eq(right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }

    /// Returns `true` iff this is a `Some` holding a value shallow-equal to
    /// `value`.
    ///
    /// For a structural test on the held value use
    /// [`contains`](Self::contains).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::optional::Optional;
    ///
    /// assert!(Optional::<i32>::of(1).has_value(&1));
    /// assert!(!Optional::<i32>::of(1).has_value(&2));
    /// assert!(!Optional::<i32>::none().has_value(&1));
    /// ```
    #[inline]
    pub fn has_value(&self, value: &T) -> bool {
        match self {
            Self::Some(held) => held.shallow_eq(value),
            Self::None => false,
        }
    }
}

impl<T: ShallowEq> PartialEq for Optional<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some( {value} )"),
            Self::None => formatter.write_str("None()"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
