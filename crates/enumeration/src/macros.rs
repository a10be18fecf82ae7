//! Declaration macro for concrete enumerations.

/// Declares a concrete enumeration type and its members.
///
/// Members are listed in declaration order as `NAME = (value, "Display Name")`.
/// Each becomes a `&'static Self` associated constant pointing at a single
/// canonical `static`. The value type defaults to `i32` when omitted.
///
/// # Examples
///
/// ```
/// use smart_enumeration::{Enumeration, IntEnumeration, enumeration};
///
/// enumeration! {
///     /// How urgent a task is.
///     pub struct Priority {
///         LOW = (1, "Low"),
///         MEDIUM = (2, "Medium"),
///         HIGH = (3, "High"),
///     }
/// }
///
/// assert_eq!(Priority::from_i32(2).unwrap().display_name(), "Medium");
/// assert!(Priority::try_from_display_name("Urgent").is_none());
/// assert_eq!(Priority::all().len(), 3);
/// ```
///
/// An explicit value type:
///
/// ```
/// use smart_enumeration::{Enumeration, enumeration};
///
/// enumeration! {
///     pub struct Grade: char {
///         PASS = ('P', "Pass"),
///         FAIL = ('F', "Fail"),
///     }
/// }
///
/// assert_eq!(Grade::from_value(&'F').unwrap(), Grade::FAIL);
/// ```
///
/// With the `serde` feature every declared type also gets serde impls, which
/// need an owned, deserializable value type. A leading
/// `#[enumeration(no_serde)]` skips them for one type and keeps the
/// [`encode`](crate::Enumeration::encode)/[`decode`](crate::Enumeration::decode)
/// pair:
///
/// ```
/// use smart_enumeration::{Enumeration, enumeration};
///
/// enumeration! {
///     #[enumeration(no_serde)]
///     pub struct Color: &'static str {
///         RED = ("r", "Red"),
///         GREEN = ("g", "Green"),
///     }
/// }
///
/// assert_eq!(Color::decode(Color::GREEN.encode()).unwrap(), Color::GREEN);
/// ```
#[macro_export]
macro_rules! enumeration {
	(@serde serde $name:ident) => {
		$crate::__impl_enumeration_serde!($name);
	};
	(@serde no_serde $name:ident) => {};
	(
		@declare $serde:ident
		$(#[$attr:meta])*
		$vis:vis struct $name:ident : $value:ty {
			$(
				$(#[$member_attr:meta])*
				$member:ident = ($member_value:expr, $label:expr $(,)?)
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
		$vis struct $name {
			member: $crate::Member<$value>,
		}

		impl $name {
			$(
				$(#[$member_attr])*
				pub const $member: &'static $name = {
					static MEMBER: $name = $name {
						member: $crate::Member::new($member_value, $label),
					};
					&MEMBER
				};
			)*
		}

		impl $crate::Enumeration for $name {
			type Value = $value;

			const TYPE_NAME: &'static str = stringify!($name);

			fn member(&self) -> &$crate::Member<$value> {
				&self.member
			}

			fn registry() -> &'static $crate::Registry<Self> {
				static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$name>> =
					::std::sync::LazyLock::new(|| {
						$crate::RegistryBuilder::new(stringify!($name))
							$(.push($name::$member))*
							.build()
					});
				&REGISTRY
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				::core::fmt::Display::fmt(&self.member, f)
			}
		}

		impl ::core::fmt::Debug for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				::core::fmt::Debug::fmt(&self.member, f)
			}
		}

		$crate::enumeration!(@serde $serde $name);
	};
	(
		#[enumeration(no_serde)]
		$(#[$attr:meta])*
		$vis:vis struct $name:ident : $value:ty {
			$($body:tt)*
		}
	) => {
		$crate::enumeration! {
			@declare no_serde
			$(#[$attr])*
			$vis struct $name : $value {
				$($body)*
			}
		}
	};
	(
		#[enumeration(no_serde)]
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			$($body:tt)*
		}
	) => {
		$crate::enumeration! {
			@declare no_serde
			$(#[$attr])*
			$vis struct $name : i32 {
				$($body)*
			}
		}
	};
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident : $value:ty {
			$($body:tt)*
		}
	) => {
		$crate::enumeration! {
			@declare serde
			$(#[$attr])*
			$vis struct $name : $value {
				$($body)*
			}
		}
	};
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			$($body:tt)*
		}
	) => {
		$crate::enumeration! {
			@declare serde
			$(#[$attr])*
			$vis struct $name : i32 {
				$($body)*
			}
		}
	};
}
