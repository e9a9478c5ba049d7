use serde::{Deserialize, Serialize};

/// File kinds a study document can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Txt,
    Image,
}

impl DocumentKind {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Doc => "doc",
            DocumentKind::Txt => "txt",
            DocumentKind::Image => "image",
        }
    }

    /// Upper-case label for badges and the type filter
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Doc => "DOC",
            DocumentKind::Txt => "TXT",
            DocumentKind::Image => "IMAGE",
        }
    }

    pub fn all() -> Vec<DocumentKind> {
        vec![
            DocumentKind::Pdf,
            DocumentKind::Doc,
            DocumentKind::Txt,
            DocumentKind::Image,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "txt" => Some(DocumentKind::Txt),
            "image" => Some(DocumentKind::Image),
            _ => None,
        }
    }
}

impl ToString for DocumentKind {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in DocumentKind::all() {
            assert_eq!(DocumentKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DocumentKind::from_code("epub"), None);
    }
}
