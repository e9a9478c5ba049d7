use serde::{Deserialize, Serialize};

/// Study subjects known to the prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Biology,
    Chemistry,
    Physics,
    Mathematics,
}

impl Subject {
    /// Stable code used in filters and the URL
    pub fn code(&self) -> &'static str {
        match self {
            Subject::Biology => "biology",
            Subject::Chemistry => "chemistry",
            Subject::Physics => "physics",
            Subject::Mathematics => "mathematics",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Biology => "Biology",
            Subject::Chemistry => "Chemistry",
            Subject::Physics => "Physics",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// All subjects, in display order
    pub fn all() -> Vec<Subject> {
        vec![
            Subject::Biology,
            Subject::Chemistry,
            Subject::Physics,
            Subject::Mathematics,
        ]
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "biology" => Some(Subject::Biology),
            "chemistry" => Some(Subject::Chemistry),
            "physics" => Some(Subject::Physics),
            "mathematics" => Some(Subject::Mathematics),
            _ => None,
        }
    }
}

impl ToString for Subject {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for subject in Subject::all() {
            assert_eq!(Subject::from_code(subject.code()), Some(subject));
        }
        assert_eq!(Subject::from_code("geography"), None);
    }
}
