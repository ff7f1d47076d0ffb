pub mod json_api; // Single-shot JSON API extraction

pub use json_api::JsonApiClient;
