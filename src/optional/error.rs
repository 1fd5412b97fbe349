//! Error types for `Optional` construction and extraction.
//!
//! Two kinds of failure exist:
//!
//! - [`ConstructionError`]: an assertive constructor was handed a value whose
//!   presence contradicts the variant being built.
//! - [`AbsentValueError`]: a value was demanded from a `None`.
//!
//! [`OptionalError`] unifies both for callers that propagate either with `?`.

use std::borrow::Cow;
use std::fmt;

/// The message carried by [`Optional::unwrap`](super::Optional::unwrap) when
/// called on a `None`.
pub const UNWRAP_NONE_MESSAGE: &str = "Called unwrap on a None value.";

/// Raised by [`Optional::some`](super::Optional::some) and
/// [`Optional::try_none`](super::Optional::try_none) when the supplied value
/// contradicts the requested variant.
///
/// # Examples
///
/// ```rust
/// use optio::optional::{ConstructionError, Optional};
///
/// let error = Optional::<i32>::some(None).unwrap_err();
/// assert_eq!(error, ConstructionError::AbsentSome);
/// assert_eq!(
///     error.to_string(),
///     "Cannot create a Some of an absent value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionError {
    /// `some` was given an absent value.
    AbsentSome,
    /// `try_none` was given a present value.
    PresentNone,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentSome => formatter.write_str("Cannot create a Some of an absent value"),
            Self::PresentNone => formatter.write_str("Cannot create a None of a present value"),
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Raised when a value is extracted from a `None`.
///
/// Carries the diagnostic message: the caller-supplied one for
/// [`try_expect`](super::Optional::try_expect), or [`UNWRAP_NONE_MESSAGE`]
/// for [`try_unwrap`](super::Optional::try_unwrap).
///
/// # Examples
///
/// ```rust
/// use optio::optional::{AbsentValueError, Optional};
///
/// let error = Optional::<i32>::none().try_expect("config key missing").unwrap_err();
/// assert_eq!(error.message(), "config key missing");
/// assert_eq!(format!("{error}"), "config key missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsentValueError {
    message: Cow<'static, str>,
}

impl AbsentValueError {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error raised by `unwrap` on a `None`.
    pub const fn unwrap_none() -> Self {
        Self {
            message: Cow::Borrowed(UNWRAP_NONE_MESSAGE),
        }
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for AbsentValueError {}

/// Represents every error an `Optional` operation can report.
///
/// # Examples
///
/// ```rust
/// use optio::optional::{Optional, OptionalError};
///
/// fn first_even(raw: Option<i32>) -> Result<i32, OptionalError> {
///     let value = Optional::<i32>::some(raw)?;
///     Ok(value.filter(|number| number % 2 == 0).try_unwrap()?)
/// }
///
/// assert_eq!(first_even(Some(4)), Ok(4));
/// assert!(matches!(first_even(None), Err(OptionalError::Construction(_))));
/// assert!(matches!(first_even(Some(3)), Err(OptionalError::AbsentValue(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalError {
    /// An assertive constructor was given the wrong kind of value.
    Construction(ConstructionError),
    /// A value was demanded from a `None`.
    AbsentValue(AbsentValueError),
}

impl fmt::Display for OptionalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(error) => write!(formatter, "{error}"),
            Self::AbsentValue(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OptionalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction(error) => Some(error),
            Self::AbsentValue(error) => Some(error),
        }
    }
}

impl From<ConstructionError> for OptionalError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<AbsentValueError> for OptionalError {
    fn from(error: AbsentValueError) -> Self {
        Self::AbsentValue(error)
    }
}
