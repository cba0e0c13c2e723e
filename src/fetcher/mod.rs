pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{Fetcher, passage_url};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
