use core::cmp::Ordering;

use crate::error::render_value;
use crate::{EnumValue, EnumerationError, Member, Registry};

/// A closed, named set of canonical `'static` members.
///
/// Implemented by each concrete enumeration, normally through
/// [`enumeration!`](crate::enumeration). Implementors supply the member
/// accessor and the per-type registry; every lookup is provided on top of
/// those two.
pub trait Enumeration: Sized + Send + Sync + 'static {
	/// Underlying comparable value.
	type Value: EnumValue;

	/// Name of the concrete type, used in error messages.
	const TYPE_NAME: &'static str;

	/// Returns the wrapped member.
	fn member(&self) -> &Member<Self::Value>;

	/// Returns the registry of this type, building it on first call.
	fn registry() -> &'static Registry<Self>;

	/// Returns the underlying value.
	fn value(&self) -> &Self::Value {
		self.member().value()
	}

	/// Returns the human-readable label.
	fn display_name(&self) -> &'static str {
		self.member().display_name()
	}

	/// Returns every declared member in declaration order.
	fn all() -> &'static [&'static Self] {
		Self::registry().items()
	}

	/// Returns an iterator over every declared member in declaration order.
	fn iter() -> impl Iterator<Item = &'static Self> {
		Self::all().iter().copied()
	}

	/// Returns the first member declared with `value`.
	fn from_value(value: &Self::Value) -> Result<&'static Self, EnumerationError> {
		Self::try_from_value(value)
			.ok_or_else(|| {
				EnumerationError::not_found(render_value(value), "value", Self::TYPE_NAME)
			})
	}

	/// Returns the first member declared with `value`, or `None`.
	fn try_from_value(value: &Self::Value) -> Option<&'static Self> {
		let found = Self::registry().get_by_value(value);
		if found.is_none() {
			tracing::trace!(enumeration = Self::TYPE_NAME, ?value, "no member with value");
		}
		found
	}

	/// Returns the first member whose display name is exactly `name`.
	fn from_display_name(name: &str) -> Result<&'static Self, EnumerationError> {
		Self::try_from_display_name(name)
			.ok_or_else(|| EnumerationError::not_found(name, "display name", Self::TYPE_NAME))
	}

	/// Returns the first member whose display name is exactly `name`, or `None`.
	fn try_from_display_name(name: &str) -> Option<&'static Self> {
		let found = Self::registry().get_by_name(name);
		if found.is_none() {
			tracing::trace!(enumeration = Self::TYPE_NAME, name, "no member with display name");
		}
		found
	}

	/// Orders by underlying value.
	///
	/// An absent counterpart behaves like comparing the value with itself, so
	/// the result is [`Ordering::Equal`] rather than a panic.
	fn compare_to(&self, other: Option<&Self>) -> Ordering {
		match other {
			Some(other) => self.value().cmp(other.value()),
			// `Ord` is reflexive: value.cmp(value) is always Equal.
			None => Ordering::Equal,
		}
	}

	/// Encodes this member as its bare value. The display name is dropped.
	fn encode(&self) -> Self::Value {
		self.value().clone()
	}

	/// Decodes a bare value back into its canonical member.
	fn decode(value: Self::Value) -> Result<&'static Self, EnumerationError> {
		Self::from_value(&value)
	}
}

/// Integer-valued enumerations.
///
/// Blanket-implemented for every [`Enumeration`] whose value is `i32`.
pub trait IntEnumeration: Enumeration<Value = i32> {
	/// Alias for [`Enumeration::from_value`].
	fn from_i32(value: i32) -> Result<&'static Self, EnumerationError> {
		Self::from_value(&value)
	}

	/// Alias for [`Enumeration::try_from_value`].
	fn try_from_i32(value: i32) -> Option<&'static Self> {
		Self::try_from_value(&value)
	}
}

impl<T: Enumeration<Value = i32>> IntEnumeration for T {}

/// Equality over possibly-absent members.
///
/// Two absent members are equal; an absent and a present member never are.
/// Present members compare by value.
pub fn eq_opt<T: Enumeration>(left: Option<&T>, right: Option<&T>) -> bool {
	match (left, right) {
		(None, None) => true,
		(Some(l), Some(r)) => l.value() == r.value(),
		_ => false,
	}
}
