use super::aggregate::{Document, DocumentId, ProcessingStatus};
use crate::enums::{DocumentKind, Subject};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The per-session document library.
///
/// Records are minted with fresh ids on every call; callers are expected to
/// seed once and keep the list in a signal.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: DocumentId::new_v4(),
            title: "Cell Structure and Function".to_string(),
            kind: DocumentKind::Pdf,
            subject: Subject::Biology,
            upload_date: date(2024, 1, 15),
            size_label: "2.4 MB".to_string(),
            status: ProcessingStatus::Processed,
            tags: tags(&["cell-biology", "organelles", "membrane"]),
            description: "Comprehensive guide to cellular components and their functions"
                .to_string(),
            assessments: 3,
            views: 24,
        },
        Document {
            id: DocumentId::new_v4(),
            title: "Chemical Bonding Fundamentals".to_string(),
            kind: DocumentKind::Pdf,
            subject: Subject::Chemistry,
            upload_date: date(2024, 1, 12),
            size_label: "1.8 MB".to_string(),
            status: ProcessingStatus::Processed,
            tags: tags(&["bonding", "ionic", "covalent"]),
            description: "Introduction to different types of chemical bonds".to_string(),
            assessments: 2,
            views: 18,
        },
        Document {
            id: DocumentId::new_v4(),
            title: "Newton's Laws of Motion".to_string(),
            kind: DocumentKind::Doc,
            subject: Subject::Physics,
            upload_date: date(2024, 1, 10),
            size_label: "856 KB".to_string(),
            status: ProcessingStatus::Processed,
            tags: tags(&["mechanics", "force", "acceleration"]),
            description: "Detailed explanation of fundamental physics principles".to_string(),
            assessments: 4,
            views: 31,
        },
        Document {
            id: DocumentId::new_v4(),
            title: "Calculus Problem Set".to_string(),
            kind: DocumentKind::Pdf,
            subject: Subject::Mathematics,
            upload_date: date(2024, 1, 8),
            size_label: "1.2 MB".to_string(),
            status: ProcessingStatus::Processing,
            tags: tags(&["calculus", "derivatives", "integrals"]),
            description: "Practice problems for advanced calculus concepts".to_string(),
            assessments: 0,
            views: 5,
        },
        Document {
            id: DocumentId::new_v4(),
            title: "Periodic Table Notes".to_string(),
            kind: DocumentKind::Txt,
            subject: Subject::Chemistry,
            upload_date: date(2024, 1, 5),
            size_label: "324 KB".to_string(),
            status: ProcessingStatus::Processed,
            tags: tags(&["periodic-table", "elements", "properties"]),
            description: "Study notes on element properties and trends".to_string(),
            assessments: 1,
            views: 12,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let documents = seed_documents();
        assert_eq!(documents.len(), 5);
        assert_eq!(
            documents
                .iter()
                .filter(|d| d.subject == Subject::Chemistry)
                .count(),
            2
        );
        assert_eq!(
            documents
                .iter()
                .filter(|d| d.status == ProcessingStatus::Processed)
                .count(),
            4
        );
        // Ids are unique within one seeding
        let ids: std::collections::HashSet<_> = documents.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 5);
    }
}
