use std::cmp::Ordering;
use std::collections::HashSet;

use pretty_assertions::assert_eq;
use smart_enumeration::{Enumeration, EnumerationError, IntEnumeration, enumeration, eq_opt};

enumeration! {
	/// How urgent a task is.
	pub struct Priority {
		LOW = (1, "Low"),
		MEDIUM = (2, "Medium"),
		HIGH = (3, "High"),
	}
}

enumeration! {
	/// Two labels for the same underlying value.
	struct Alias: i32 {
		FIRST = (7, "First"),
		SECOND = (7, "Second"),
		OTHER = (8, "Other"),
	}
}

enumeration! {
	struct Nothing: u16 {}
}

enumeration! {
	struct Tier: u64 {
		BRONZE = (10, "Bronze"),
		GOLD = (30, "Gold"),
		SILVER = (20, "Silver"),
	}
}

#[test]
fn all_returns_members_in_declaration_order() {
	let names: Vec<_> = Priority::all().iter().map(|p| p.display_name()).collect();
	assert_eq!(names, vec!["Low", "Medium", "High"]);
}

#[test]
fn all_is_cached() {
	let first = Priority::all();
	let second = Priority::all();
	assert!(std::ptr::eq(first, second));
	for (a, b) in first.iter().zip(second) {
		assert!(std::ptr::eq(*a, *b));
	}
}

#[test]
fn members_are_canonical_statics() {
	assert!(std::ptr::eq(Priority::all()[1], Priority::MEDIUM));
	assert!(std::ptr::eq(Priority::MEDIUM, Priority::MEDIUM));
}

#[test]
fn lookups_find_every_member() {
	for &member in Priority::all() {
		assert_eq!(Priority::from_value(member.value()).unwrap(), member);
		assert_eq!(Priority::from_display_name(member.display_name()).unwrap(), member);
	}
}

#[test]
fn concrete_example() {
	assert_eq!(Priority::from_value(&2).unwrap().display_name(), "Medium");
	assert!(Priority::try_from_display_name("Urgent").is_none());
	assert_eq!(Priority::all().len(), 3);
	assert_eq!(Priority::MEDIUM.encode(), 2);
	assert_eq!(Priority::decode(2).unwrap(), Priority::MEDIUM);
}

#[test]
fn int_aliases() {
	assert!(std::ptr::eq(Priority::from_i32(3).unwrap(), Priority::HIGH));
	assert!(std::ptr::eq(Priority::try_from_i32(1).unwrap(), Priority::LOW));
	assert!(Priority::try_from_i32(4).is_none());
}

#[test]
fn try_lookups_report_missing() {
	assert!(Priority::try_from_value(&0).is_none());
	assert!(Priority::try_from_display_name("").is_none());
}

#[test]
fn display_name_lookup_is_exact() {
	assert!(Priority::try_from_display_name("low").is_none());
	assert!(Priority::try_from_display_name(" Low").is_none());
	assert!(Priority::try_from_display_name("Low").is_some());
}

#[test]
fn not_found_names_value_field_and_type() {
	let err = Priority::from_value(&99).unwrap_err();
	assert_eq!(
		err,
		EnumerationError::NotFound {
			sought: "99".to_string(),
			field: "value",
			type_name: "Priority",
		}
	);
	assert_eq!(err.to_string(), "'99' is not a valid value in Priority");

	let err = Priority::from_display_name("Urgent").unwrap_err();
	assert_eq!(err.to_string(), "'Urgent' is not a valid display name in Priority");
}

#[test]
fn equality_uses_value_only() {
	assert_eq!(Alias::FIRST, Alias::SECOND);
	assert_ne!(Alias::FIRST, Alias::OTHER);

	let set: HashSet<&Alias> = Alias::all().iter().copied().collect();
	assert_eq!(set.len(), 2);
}

#[test]
fn duplicate_values_resolve_to_first_declaration() {
	assert_eq!(Alias::all().len(), 3);
	assert!(std::ptr::eq(Alias::from_value(&7).unwrap(), Alias::FIRST));
	assert!(std::ptr::eq(Alias::from_display_name("Second").unwrap(), Alias::SECOND));
	assert!(std::ptr::eq(Alias::decode(Alias::SECOND.encode()).unwrap(), Alias::FIRST));
}

#[test]
fn ordering_follows_values() {
	assert!(Priority::LOW < Priority::MEDIUM);
	assert!(Priority::MEDIUM < Priority::HIGH);
	assert_eq!(Priority::HIGH.compare_to(Some(Priority::LOW)), Ordering::Greater);
	assert_eq!(Priority::LOW.compare_to(Some(Priority::HIGH)), Ordering::Less);

	// Declaration order and value order are independent.
	let mut tiers: Vec<&Tier> = Tier::all().to_vec();
	tiers.sort();
	let names: Vec<_> = tiers.iter().map(|t| t.display_name()).collect();
	assert_eq!(names, vec!["Bronze", "Silver", "Gold"]);
}

#[test]
fn compare_to_absent_is_equal() {
	assert_eq!(Priority::HIGH.compare_to(None), Ordering::Equal);
}

#[test]
fn optional_equality() {
	assert!(eq_opt::<Priority>(None, None));
	assert!(!eq_opt(Some(Priority::LOW), None));
	assert!(!eq_opt(None, Some(Priority::LOW)));
	assert!(eq_opt(Some(Alias::FIRST), Some(Alias::SECOND)));
	assert!(!eq_opt(Some(Priority::LOW), Some(Priority::HIGH)));
}

#[test]
fn renders_display_name() {
	assert_eq!(Priority::HIGH.to_string(), "High");
	assert_eq!(format!("{}", Alias::SECOND), "Second");
	assert_eq!(format!("{:?}", Priority::HIGH), "High - 3");
}

#[test]
fn empty_enumeration_is_valid() {
	assert!(Nothing::all().is_empty());
	assert_eq!(Nothing::iter().count(), 0);
	assert!(Nothing::from_value(&1).unwrap_err().is_not_found());
}

#[test]
fn iter_matches_all() {
	let via_iter: Vec<_> = Tier::iter().map(|t| *t.value()).collect();
	assert_eq!(via_iter, vec![10, 30, 20]);
}
