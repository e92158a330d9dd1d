use super::types::{SortKey, SortOrder, SortSpec};
use crate::models::Listing;
use std::cmp::Reverse;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation key for titles.
///
/// The primary level is the compatibility decomposition (NFKD) with
/// combining marks dropped and case folded, so `é` sits next to `e` and a
/// lone compatibility jamo such as `ㄱ` sorts just before the syllables that
/// start with it. Decomposed Hangul keeps dictionary order. The secondary
/// level is the raw text so the order stays total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TitleKey {
    folded: String,
    raw: String,
}

impl TitleKey {
    pub fn new(title: &str) -> Self {
        let folded: String = title
            .trim()
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        Self {
            folded: folded.to_lowercase(),
            raw: title.to_string(),
        }
    }
}

/// Amount compared under [`SortKey::Price`]; absent values sort as 0.
pub fn price_key(listing: &Listing) -> i64 {
    listing.headline_amount().unwrap_or(0)
}

pub fn sequence_key(listing: &Listing) -> i64 {
    listing.sequence_number.unwrap_or(0)
}

/// Stable sort of `rows` by `spec`. Keys are computed once per row.
pub fn sort_listings(rows: &mut [&Listing], spec: SortSpec) {
    match spec.key {
        SortKey::Title => sort_by_key(rows, spec.order, |l| TitleKey::new(&l.title)),
        SortKey::Price => sort_by_key(rows, spec.order, price_key),
        SortKey::Sequence => sort_by_key(rows, spec.order, sequence_key),
    }
}

fn sort_by_key<K, F>(rows: &mut [&Listing], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&Listing) -> K,
{
    // sort_by_cached_key keeps equal elements in their original order
    match order {
        SortOrder::Ascending => rows.sort_by_cached_key(|l| key(l)),
        SortOrder::Descending => rows.sort_by_cached_key(|l| Reverse(key(l))),
    }
}
