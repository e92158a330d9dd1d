pub mod categories;
pub mod pipeline;
pub mod predicate;
pub mod presets;
pub mod sort;
pub mod types;

pub use pipeline::{apply, ListingBoard};
pub use presets::Preset;
pub use types::{FilterConfig, Requirement, SortKey, SortOrder, SortSpec, TradeTypeFilter};
