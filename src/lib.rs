//! Listing browser for a small real-estate office.
//!
//! Listings are fetched once from the hosted backend (or a JSON export),
//! then narrowed and ordered in memory by [`filters::apply`]. The pipeline is
//! pure: it borrows the snapshot and never fails.

pub mod cli;
pub mod filters;
pub mod models;
pub mod pricing;
pub mod sources;
pub mod tools;

pub use filters::{apply, FilterConfig, ListingBoard, SortSpec};
pub use models::{Listing, TradeType, UsageCategories};
