//! The `Optional` type: explicit presence or absence of a value.
//!
//! This module provides:
//!
//! - [`Optional`]: The two-variant sum type (`Some` / `None`) and its combinators
//! - [`Match`]: The handler pair consumed by [`Optional::match_with`]
//! - [`ShallowEq`]: The identity-style equality used by `equals` and `has_value`
//! - [`ConstructionError`], [`AbsentValueError`], [`OptionalError`]: Failure types
//!
//! # Examples
//!
//! ## Construction
//!
//! ```rust
//! use optio::optional::{ConstructionError, Optional};
//!
//! // `of` never fails: absence becomes `None`.
//! let maybe: Optional<i32> = Optional::of(None);
//! assert!(maybe.is_none());
//!
//! // `some` and `try_none` assert what the caller believes.
//! assert_eq!(Optional::<i32>::some(None).err(), Some(ConstructionError::AbsentSome));
//! assert_eq!(Optional::<i32>::try_none(1).err(), Some(ConstructionError::PresentNone));
//! ```
//!
//! ## Chaining
//!
//! ```rust
//! use optio::optional::{Match, Optional};
//!
//! let label = Optional::<i32>::of(7)
//!     .filter(|value| *value > 0)
//!     .map(|value| value * 6)
//!     .match_with(Match {
//!         some: |value: i32| format!("answer: {value}"),
//!         none: || "no answer".to_string(),
//!     });
//! assert_eq!(label, "answer: 42");
//! ```

mod container;
mod error;
mod matcher;
mod shallow;

pub use container::Optional;
pub use error::{AbsentValueError, ConstructionError, OptionalError, UNWRAP_NONE_MESSAGE};
pub use matcher::Match;
pub use shallow::ShallowEq;
