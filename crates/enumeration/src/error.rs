use thiserror::Error;

/// Errors produced by member construction, registry builds, and lookups.
///
/// Lookups never retry: registries are fixed, so a miss is final. Callers
/// that want a non-failing path use the `try_*` lookups instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
	/// A member was constructed without a value.
	#[error("invalid argument: {reason}")]
	InvalidArgument {
		/// What was wrong with the input.
		reason: &'static str,
	},
	/// No registry member matched the sought key.
	#[error("'{sought}' is not a valid {field} in {type_name}")]
	NotFound {
		/// The rendered value or display name that was searched for.
		sought: String,
		/// Human label of the searched field (`"value"` or `"display name"`).
		field: &'static str,
		/// Name of the concrete enumeration type.
		type_name: &'static str,
	},
	/// Two members share a value and the registry was built with
	/// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("duplicate value in {type_name}: {value} (declared by {first:?} and {second:?})")]
	DuplicateValue {
		type_name: &'static str,
		value: String,
		first: &'static str,
		second: &'static str,
	},
	/// Two members share a display name and the registry was built with
	/// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("duplicate display name in {type_name}: {name:?}")]
	DuplicateDisplayName {
		type_name: &'static str,
		name: &'static str,
	},
}

impl EnumerationError {
	/// Builds a [`NotFound`](Self::NotFound) error for a failed lookup.
	pub fn not_found(
		sought: impl Into<String>,
		field: &'static str,
		type_name: &'static str,
	) -> Self {
		Self::NotFound {
			sought: sought.into(),
			field,
			type_name,
		}
	}

	/// Returns true if this is a lookup miss.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Renders a sought value for error messages.
///
/// Values only guarantee `Debug`; the quotes it adds around strings and chars
/// are dropped so `'Q'` reads as `Q`.
pub(crate) fn render_value(value: &dyn core::fmt::Debug) -> String {
	let rendered = format!("{value:?}");
	for quote in ['"', '\''] {
		if let Some(inner) = rendered
			.strip_prefix(quote)
			.and_then(|s| s.strip_suffix(quote))
		{
			return inner.to_string();
		}
	}
	rendered
}
