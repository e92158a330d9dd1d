//! Free usage-category matching.
//!
//! Most categories match by plain membership in the listing's usage list. A
//! couple of UI categories are composites; those live in [`SPECIAL_RULES`].

use crate::models::{Listing, USAGE_APARTMENT, USAGE_DETACHED_HOUSE, USAGE_MULTI_UNIT};

/// 원/투룸: one or two rooms, never an apartment
pub const STUDIO_OR_ONE_ROOM: &str = "원/투룸";
/// 주택: multi-unit dwelling or detached house
pub const HOUSE: &str = "주택";

/// Categories offered by the free usage selector
pub const SELECTABLE_CATEGORIES: [&str; 6] =
    ["아파트", STUDIO_OR_ONE_ROOM, HOUSE, "오피스텔", "상가", "토지"];

pub type CategoryRule = fn(&Listing) -> bool;

/// Named predicates for composite categories
pub const SPECIAL_RULES: &[(&str, CategoryRule)] =
    &[(STUDIO_OR_ONE_ROOM, studio_or_one_room), (HOUSE, house)];

/// Apartments are excluded even with a matching room count.
// NOTE: earlier listings pages matched on room count alone; confirm with the
// office before loosening this again.
pub fn studio_or_one_room(listing: &Listing) -> bool {
    let rooms = listing.room_count.unwrap_or(0);
    (1..=2).contains(&rooms) && !listing.usage.contains(USAGE_APARTMENT)
}

pub fn house(listing: &Listing) -> bool {
    listing.usage.contains(USAGE_MULTI_UNIT) || listing.usage.contains(USAGE_DETACHED_HOUSE)
}

/// Look up the rule for `category`, if it has one.
pub fn rule_for(category: &str) -> Option<CategoryRule> {
    SPECIAL_RULES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, rule)| *rule)
}

/// Whether `listing` falls into `category`.
pub fn matches_category(listing: &Listing, category: &str) -> bool {
    match rule_for(category) {
        Some(rule) => rule(listing),
        None => listing.usage.contains(category),
    }
}

/// Whether `listing` matches any selected category. An empty selection
/// matches everything.
pub fn matches_any<S: AsRef<str>>(listing: &Listing, selected: &[S]) -> bool {
    selected.is_empty()
        || selected
            .iter()
            .any(|category| matches_category(listing, category.as_ref()))
}
