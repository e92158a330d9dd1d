pub mod file;
pub mod rest;
pub mod traits;
pub mod types;

pub use file::JsonFileSource;
pub use rest::RestListingSource;
pub use traits::ListingSource;
pub use types::BackendConfig;
