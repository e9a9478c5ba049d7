use super::aggregate::Document;
use crate::enums::{DocumentKind, Subject};
use crate::shared::Searchable;

impl Searchable for Document {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Combined library filter: free-text search AND subject AND kind.
///
/// `None` in `subject`/`kind` means "all". Applied synchronously on every
/// keystroke or selection change; there is no debouncing.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub search: String,
    pub subject: Option<Subject>,
    pub kind: Option<DocumentKind>,
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        let matches_search = document.matches_filter(&self.search);
        let matches_subject = self
            .subject
            .map(|subject| document.subject == subject)
            .unwrap_or(true);
        let matches_kind = self
            .kind
            .map(|kind| document.kind == kind)
            .unwrap_or(true);

        matches_search && matches_subject && matches_kind
    }

    pub fn apply(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .filter(|document| self.matches(document))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_document::seed::seed_documents;

    fn titles(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn test_search_by_title() {
        let filter = DocumentFilter {
            search: "cell".to_string(),
            ..Default::default()
        };
        let found = filter.apply(&seed_documents());
        assert_eq!(titles(&found), vec!["Cell Structure and Function"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = DocumentFilter {
            search: "NEWTON".to_string(),
            ..Default::default()
        };
        let found = filter.apply(&seed_documents());
        assert_eq!(titles(&found), vec!["Newton's Laws of Motion"]);
    }

    #[test]
    fn test_search_matches_tags_and_description() {
        // "derivatives" appears only in the calculus tags
        let by_tag = DocumentFilter {
            search: "derivatives".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&by_tag.apply(&seed_documents())), vec!["Calculus Problem Set"]);

        // "trends" appears only in the periodic table description
        let by_description = DocumentFilter {
            search: "trends".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&by_description.apply(&seed_documents())),
            vec!["Periodic Table Notes"]
        );
    }

    #[test]
    fn test_subject_filter_ignores_search_mismatch() {
        // Both chemistry documents come back regardless of search text
        let filter = DocumentFilter {
            search: String::new(),
            subject: Some(Subject::Chemistry),
            kind: None,
        };
        let found = filter.apply(&seed_documents());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|d| d.subject == Subject::Chemistry));
    }

    #[test]
    fn test_kind_filter() {
        let filter = DocumentFilter {
            search: String::new(),
            subject: None,
            kind: Some(DocumentKind::Txt),
        };
        let found = filter.apply(&seed_documents());
        assert_eq!(titles(&found), vec!["Periodic Table Notes"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = DocumentFilter {
            search: "bonding".to_string(),
            subject: Some(Subject::Chemistry),
            kind: Some(DocumentKind::Pdf),
        };
        let found = filter.apply(&seed_documents());
        assert_eq!(titles(&found), vec!["Chemical Bonding Fundamentals"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filter = DocumentFilter {
            search: "thermodynamics".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&seed_documents()).is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = DocumentFilter::default();
        assert_eq!(filter.apply(&seed_documents()).len(), 5);
    }
}
