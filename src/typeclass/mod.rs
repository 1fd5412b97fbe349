//! Type class traits implemented for [`Optional`](crate::optional::Optional).
//!
//! - [`Functor`]: Mapping over the held value
//! - [`Applicative`]: Lifting values and combining independent `Optional`s
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so the traits above can be written once against any type constructor.
//!
//! # Examples
//!
//! ```rust
//! use optio::optional::Optional;
//! use optio::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Optional::<u32>::of(3);
//! let height = Optional::<u32>::of(4);
//!
//! let area = width.map2(height, |w, h| w * h).fmap(u64::from);
//! assert!(area.has_value(&12));
//!
//! let checked = area.and_then(|value| Optional::<u64>::of(value.checked_mul(2)));
//! assert!(checked.has_value(&24));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
