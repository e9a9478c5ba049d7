use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a file in the upload queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadId(pub Uuid);

impl UploadId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for UploadId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UploadId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Lifecycle of a queued file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
    /// Declared for completeness; no current driver emits `Failed`
    Error,
}

impl UploadStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Processing => "processing",
            UploadStatus::Completed => "completed",
            UploadStatus::Error => "error",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading",
            UploadStatus::Processing => "Processing",
            UploadStatus::Completed => "Completed",
            UploadStatus::Error => "Error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Error)
    }
}

/// Discrete events that advance a queued file.
///
/// The view layer owns the timers and translates them into events; the
/// machine itself is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadEvent {
    /// Simulated upload progress increment (percent points)
    Tick { amount: f64 },
    /// Simulated post-upload processing finished
    ProcessingDone,
    /// Declared transition into `Error`; never emitted by current drivers
    Failed,
}

/// A file in the upload queue.
///
/// Created on file selection, advanced only through [`UploadEvent`]s,
/// removable in any state, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: UploadId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub status: UploadStatus,
    /// Percent progress of the current phase, 0..=100
    pub progress: f64,
}

impl UploadedFile {
    pub fn new(id: UploadId, name: String, size_bytes: u64, mime_type: String) -> Self {
        Self {
            id,
            name,
            size_bytes,
            mime_type,
            status: UploadStatus::Uploading,
            progress: 0.0,
        }
    }

    /// Advance the file by one event.
    ///
    /// Events that do not apply to the current status are ignored, so a
    /// stray timer firing after a transition cannot corrupt the state.
    pub fn apply(&mut self, event: UploadEvent) {
        match (self.status, event) {
            (UploadStatus::Uploading, UploadEvent::Tick { amount }) => {
                self.progress += amount;
                if self.progress >= 100.0 {
                    // Upload finished; processing starts with a fresh bar
                    self.status = UploadStatus::Processing;
                    self.progress = 0.0;
                }
            }
            (UploadStatus::Processing, UploadEvent::ProcessingDone) => {
                self.status = UploadStatus::Completed;
                self.progress = 100.0;
            }
            (UploadStatus::Uploading | UploadStatus::Processing, UploadEvent::Failed) => {
                self.status = UploadStatus::Error;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> UploadedFile {
        UploadedFile::new(
            UploadId::new_v4(),
            "notes.pdf".to_string(),
            2_400_000,
            "application/pdf".to_string(),
        )
    }

    #[test]
    fn test_starts_uploading_at_zero() {
        let f = file();
        assert_eq!(f.status, UploadStatus::Uploading);
        assert_eq!(f.progress, 0.0);
    }

    #[test]
    fn test_ticks_accumulate() {
        let mut f = file();
        f.apply(UploadEvent::Tick { amount: 15.0 });
        f.apply(UploadEvent::Tick { amount: 10.5 });
        assert_eq!(f.status, UploadStatus::Uploading);
        assert_eq!(f.progress, 25.5);
    }

    #[test]
    fn test_upload_boundary_resets_progress_for_processing() {
        let mut f = file();
        f.apply(UploadEvent::Tick { amount: 99.9 });
        assert_eq!(f.status, UploadStatus::Uploading);
        f.apply(UploadEvent::Tick { amount: 0.2 });
        assert_eq!(f.status, UploadStatus::Processing);
        assert_eq!(f.progress, 0.0);
    }

    #[test]
    fn test_full_walk_ends_completed_at_100() {
        let mut f = file();
        while f.status == UploadStatus::Uploading {
            f.apply(UploadEvent::Tick { amount: 17.0 });
        }
        assert_eq!(f.status, UploadStatus::Processing);
        f.apply(UploadEvent::ProcessingDone);
        assert_eq!(f.status, UploadStatus::Completed);
        assert_eq!(f.progress, 100.0);

        // No further transitions out of the terminal state
        f.apply(UploadEvent::Tick { amount: 50.0 });
        f.apply(UploadEvent::ProcessingDone);
        f.apply(UploadEvent::Failed);
        assert_eq!(f.status, UploadStatus::Completed);
        assert_eq!(f.progress, 100.0);
    }

    #[test]
    fn test_events_outside_their_phase_are_ignored() {
        let mut f = file();
        // ProcessingDone means nothing while still uploading
        f.apply(UploadEvent::ProcessingDone);
        assert_eq!(f.status, UploadStatus::Uploading);

        f.apply(UploadEvent::Tick { amount: 100.0 });
        assert_eq!(f.status, UploadStatus::Processing);
        // Ticks mean nothing while processing
        f.apply(UploadEvent::Tick { amount: 40.0 });
        assert_eq!(f.progress, 0.0);
    }

    #[test]
    fn test_failed_is_reachable_but_terminal() {
        let mut f = file();
        f.apply(UploadEvent::Failed);
        assert_eq!(f.status, UploadStatus::Error);
        assert!(f.status.is_terminal());

        f.apply(UploadEvent::Tick { amount: 10.0 });
        f.apply(UploadEvent::ProcessingDone);
        assert_eq!(f.status, UploadStatus::Error);
    }
}
