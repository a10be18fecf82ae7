//! Value-only codec for enumeration members.
//!
//! Members travel as their bare value. Decoding goes back through the
//! registry of the target type, so a round trip always yields the canonical
//! static instance, never a detached copy. The target type is the static type
//! being decoded into; nothing about it is read from the payload.

use crate::{Enumeration, EnumerationError};

/// Encodes `member` as its bare value.
pub fn encode<T: Enumeration>(member: &T) -> T::Value {
	member.encode()
}

/// Resolves a bare value to the canonical member of `T`.
pub fn decode<T: Enumeration>(value: T::Value) -> Result<&'static T, EnumerationError> {
	T::decode(value)
}

/// Serializes `member` as its bare value.
#[cfg(feature = "serde")]
pub fn serialize<T, S>(member: &T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Enumeration,
	T::Value: serde::Serialize,
	S: serde::Serializer,
{
	serde::Serialize::serialize(member.value(), serializer)
}

/// Deserializes a bare value and resolves it to the canonical member of `T`.
///
/// Unknown values fail with the [`EnumerationError::NotFound`] message.
/// Usable as `#[serde(deserialize_with = "smart_enumeration::codec::deserialize")]`
/// on `&'static T` fields.
#[cfg(feature = "serde")]
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<&'static T, D::Error>
where
	T: Enumeration,
	T::Value: serde::Deserialize<'de>,
	D: serde::Deserializer<'de>,
{
	let value = <T::Value as serde::Deserialize<'de>>::deserialize(deserializer)?;
	T::decode(value).map_err(serde::de::Error::custom)
}

/// Implements `Serialize` for an enumeration type and `Deserialize` for
/// references to its canonical members.
#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_enumeration_serde {
	($name:ident) => {
		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				$crate::codec::serialize(self, serializer)
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for &'static $name {
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				$crate::codec::deserialize::<$name, D>(deserializer)
			}
		}
	};
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_enumeration_serde {
	($name:ident) => {};
}
