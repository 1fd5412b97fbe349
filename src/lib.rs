//! # optio
//!
//! An explicit optional-value type for Rust with a complete combinator algebra.
//!
//! ## Overview
//!
//! [`Optional<T>`](optional::Optional) is a closed two-variant sum type: a value
//! is either `Some(value)` or `None`. Absence is represented structurally by the
//! `None` tag; the host ecosystem's absence sentinel (`std::option::Option::None`)
//! is only inspected at the construction boundary ([`Optional::of`](optional::Optional::of)).
//!
//! - **Construction**: `of`, the assertive `some` / `try_none`, and `none`
//! - **Inspection**: `is_some`, `is_none`, `equals`, `has_value`, `contains`, `Display`
//! - **Extraction**: `expect`, `unwrap`, `unwrap_or`, `unwrap_or_else`
//! - **Transformation**: `map`, `map_or`, `map_or_else`, `and`, `flat_map`, `or`,
//!   `or_else`, `filter`, `for_each`, `match_with`, `clone`
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` instances
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits implemented for `Optional` (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optio::prelude::*;
//!
//! let doubled = Optional::<i32>::of(21).map(|value| value * 2);
//! assert_eq!(doubled.unwrap_or(0), 42);
//!
//! let missing = Optional::<i32>::of(None);
//! assert_eq!(missing.to_string(), "None()");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;
