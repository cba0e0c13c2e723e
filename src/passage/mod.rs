pub mod errors;
pub mod model;
pub mod service;
pub mod source;

pub use errors::PassageError;
pub use model::{PassageRequest, PassageResult, parse_chapter};
pub use service::lookup;
pub use source::PassageSource;
