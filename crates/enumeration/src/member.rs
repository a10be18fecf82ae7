//! The value object every enumerator wraps.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::EnumerationError;

/// Bound for the underlying value of an enumeration.
///
/// Blanket-implemented; any ordered, hashable, debuggable value that can live
/// in a `static` qualifies.
pub trait EnumValue: Ord + Hash + Clone + core::fmt::Debug + Send + Sync + 'static {}

impl<V> EnumValue for V where V: Ord + Hash + Clone + core::fmt::Debug + Send + Sync + 'static {}

/// An immutable `(value, display name)` pair.
///
/// Equality, hashing, and ordering look at `value` only. Two members with the
/// same value and different display names are interchangeable.
#[derive(Clone, Copy)]
pub struct Member<V> {
	value: V,
	display_name: &'static str,
}

impl<V> Member<V> {
	/// Creates a member. Usable in `static` initializers.
	pub const fn new(value: V, display_name: &'static str) -> Self {
		Self {
			value,
			display_name,
		}
	}

	/// Creates a member from a value that may be absent.
	///
	/// Fails with [`EnumerationError::InvalidArgument`] when `value` is `None`;
	/// nothing is constructed in that case.
	pub fn try_new(value: Option<V>, display_name: &'static str) -> Result<Self, EnumerationError> {
		match value {
			Some(value) => Ok(Self::new(value, display_name)),
			None => Err(EnumerationError::InvalidArgument {
				reason: "enumeration value must be present",
			}),
		}
	}

	/// Returns the underlying value.
	#[inline]
	pub const fn value(&self) -> &V {
		&self.value
	}

	/// Returns the human-readable label.
	#[inline]
	pub const fn display_name(&self) -> &'static str {
		self.display_name
	}
}

impl<V: PartialEq> PartialEq for Member<V> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<V: Eq> Eq for Member<V> {}

impl<V: Hash> Hash for Member<V> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl<V: PartialOrd> PartialOrd for Member<V> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.value.partial_cmp(&other.value)
	}
}

impl<V: Ord> Ord for Member<V> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value.cmp(&other.value)
	}
}

impl<V> core::fmt::Display for Member<V> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.display_name)
	}
}

impl<V: core::fmt::Debug> core::fmt::Debug for Member<V> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{} - {:?}", self.display_name, self.value)
	}
}
