use super::predicate;
use super::sort::sort_listings;
use super::types::{FilterConfig, SortSpec};
use crate::models::Listing;
use tracing::debug;

/// Filter then sort a snapshot of listings. Never mutates the input; the
/// result borrows from it.
pub fn apply<'a>(listings: &'a [Listing], filter: &FilterConfig, sort: SortSpec) -> Vec<&'a Listing> {
    let mut rows: Vec<&Listing> = listings
        .iter()
        .filter(|listing| predicate::matches(listing, filter))
        .collect();
    sort_listings(&mut rows, sort);

    debug!(
        total = listings.len(),
        kept = rows.len(),
        key = ?sort.key,
        order = ?sort.order,
        "filtered listings"
    );
    rows
}

/// Fetched listings plus the filter and sort currently chosen by the user.
///
/// Each setter replaces the previous value outright; the view is recomputed
/// from scratch on every call to [`ListingBoard::visible`].
#[derive(Debug, Clone, Default)]
pub struct ListingBoard {
    listings: Vec<Listing>,
    filter: FilterConfig,
    sort: SortSpec,
}

impl ListingBoard {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Flip one free usage category, as the category checkboxes do.
    pub fn toggle_usage(&mut self, category: &str) {
        self.filter = std::mem::take(&mut self.filter).toggle_usage(category);
    }

    /// Swap in a freshly fetched snapshot.
    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
    }

    /// Drop a listing the backend has deleted. Returns it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Listing> {
        let pos = self.listings.iter().position(|l| l.id == id)?;
        Some(self.listings.remove(pos))
    }

    pub fn visible(&self) -> Vec<&Listing> {
        apply(&self.listings, &self.filter, self.sort)
    }
}
