pub mod aggregate;
pub mod filter;
pub mod seed;

pub use aggregate::{Document, DocumentId, ProcessingStatus};
pub use filter::DocumentFilter;
pub use seed::seed_documents;
