//! Smart enumerations: closed sets of named, strongly-typed singletons.
//!
//! A smart enumeration replaces a primitive `enum` with a fixed set of
//! canonical `'static` members, each pairing an underlying value with a
//! display name. This crate provides the shared machinery:
//! - [`Member`]: the immutable `(value, display name)` pair
//! - [`Enumeration`]: discovery, lookup, ordering, and codec operations
//! - [`IntEnumeration`]: `i32` shorthands
//! - [`Registry`]: the cached, declaration-ordered member set of one type
//! - [`codec`]: value-only encoding that decodes back to canonical members
//! - [`enumeration!`]: the declaration macro
//!
//! # Semantics
//!
//! - Equality, hashing, and ordering use the value only.
//! - Lookups return the first member in declaration order. Shared values are
//!   allowed and logged, not rejected.
//! - Each registry is built once, on first use, behind a `LazyLock`.
//!
//! # Features
//!
//! - `serde` (default): the macro implements `Serialize` for the type (bare
//!   value) and `Deserialize` for `&'static Type` (canonical member).

pub mod codec;
mod error;
mod macros;
mod member;
pub mod registry;
mod traits;

pub use error::EnumerationError;
pub use member::{EnumValue, Member};
pub use registry::{DuplicatePolicy, Registry, RegistryBuilder};
pub use traits::{Enumeration, IntEnumeration, eq_opt};

#[doc(hidden)]
pub mod __private {
	#[cfg(feature = "serde")]
	pub use serde;
}
