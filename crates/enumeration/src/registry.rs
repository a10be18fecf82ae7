//! Per-type member registries.
//!
//! Every concrete enumeration owns exactly one [`Registry`], built on first
//! use from its explicit member list and cached for the rest of the process:
//!
//! ```rust,ignore
//! fn registry() -> &'static Registry<Priority> {
//!     static REGISTRY: LazyLock<Registry<Priority>> = LazyLock::new(|| {
//!         RegistryBuilder::new("Priority")
//!             .extend([Priority::LOW, Priority::MEDIUM, Priority::HIGH])
//!             .build()
//!     });
//!     &REGISTRY
//! }
//! ```
//!
//! The [`enumeration!`](crate::enumeration) macro emits exactly this.

use std::collections::{HashMap, HashSet};

use crate::{Enumeration, EnumerationError};


/// Policy for members that share a value or display name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the first member in declaration order for a key. Later members
	/// stay enumerable through [`Registry::items`] but are never returned by a
	/// lookup on the shared key.
	#[default]
	FirstWins,
	/// Refuse to build a registry with shared keys.
	Reject,
}

/// The fixed, ordered set of canonical members of one enumeration type.
///
/// Built via [`RegistryBuilder`]. Provides:
/// - declaration-order iteration via [`items`](Self::items)
/// - O(1) lookup by value via [`get_by_value`](Self::get_by_value)
/// - O(1) lookup by display name via [`get_by_name`](Self::get_by_name)
pub struct Registry<T: Enumeration> {
	label: &'static str,
	items: Vec<&'static T>,
	by_value: HashMap<T::Value, &'static T>,
	by_name: HashMap<&'static str, &'static T>,
}

impl<T: Enumeration> Registry<T> {
	/// Returns the label used in logs and error messages.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up the first member declared with `value`.
	#[inline]
	pub fn get_by_value(&self, value: &T::Value) -> Option<&'static T> {
		self.by_value.get(value).copied()
	}

	/// Looks up the first member declared with `name`. Case-sensitive.
	#[inline]
	pub fn get_by_name(&self, name: &str) -> Option<&'static T> {
		self.by_name.get(name).copied()
	}

	/// Returns all members in declaration order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Returns the number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if no members were declared.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all members in declaration order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}
}

impl<T: Enumeration> core::fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("items", &self.items.len())
			.finish()
	}
}

/// Builder for constructing a [`Registry`].
///
/// Collects members in the order given, drops repeated pushes of the same
/// static, resolves shared keys by policy, and produces the final registry.
pub struct RegistryBuilder<T: Enumeration> {
	label: &'static str,
	defs: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: Enumeration> RegistryBuilder<T> {
	/// Creates a new builder with the given label for logs and errors.
	///
	/// Defaults to [`DuplicatePolicy::FirstWins`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::FirstWins,
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single member.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple members, preserving their order.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Builds the registry.
	///
	/// # Panics
	///
	/// Panics if keys are shared and the policy is [`DuplicatePolicy::Reject`].
	/// Use [`try_build`](Self::try_build) to handle that case.
	pub fn build(self) -> Registry<T> {
		match self.try_build() {
			Ok(registry) => registry,
			Err(err) => panic!("invalid enumeration registry: {err}"),
		}
	}

	/// Builds the registry, reporting shared keys under [`DuplicatePolicy::Reject`].
	pub fn try_build(mut self) -> Result<Registry<T>, EnumerationError> {
		let mut seen = HashSet::with_capacity(self.defs.len());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		let mut by_value: HashMap<T::Value, &'static T> = HashMap::with_capacity(self.defs.len());
		let mut by_name: HashMap<&'static str, &'static T> =
			HashMap::with_capacity(self.defs.len());

		for &def in &self.defs {
			if let Some(&existing) = by_value.get(def.value()) {
				match self.policy {
					DuplicatePolicy::Reject => {
						return Err(EnumerationError::DuplicateValue {
							type_name: self.label,
							value: format!("{:?}", def.value()),
							first: existing.display_name(),
							second: def.display_name(),
						});
					}
					DuplicatePolicy::FirstWins => {
						tracing::warn!(
							registry = self.label,
							value = ?def.value(),
							kept = existing.display_name(),
							shadowed = def.display_name(),
							"duplicate enumeration value; lookups resolve to the first member"
						);
					}
				}
			} else {
				by_value.insert(def.value().clone(), def);
			}

			let name = def.display_name();
			if by_name.contains_key(name) {
				match self.policy {
					DuplicatePolicy::Reject => {
						return Err(EnumerationError::DuplicateDisplayName {
							type_name: self.label,
							name,
						});
					}
					DuplicatePolicy::FirstWins => {
						tracing::warn!(
							registry = self.label,
							name,
							"duplicate enumeration display name; lookups resolve to the first member"
						);
					}
				}
			} else {
				by_name.insert(name, def);
			}
		}

		tracing::debug!(
			registry = self.label,
			members = self.defs.len(),
			"built enumeration registry"
		);

		Ok(Registry {
			label: self.label,
			items: self.defs,
			by_value,
			by_name,
		})
	}
}
