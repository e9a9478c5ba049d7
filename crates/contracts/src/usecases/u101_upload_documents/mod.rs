pub mod progress;

pub use progress::{UploadEvent, UploadId, UploadStatus, UploadedFile};
