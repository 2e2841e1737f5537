#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JlptLevel {
    N5, // Beginner
    N4, // Elementary
    N3, // Intermediate
    N2, // Upper intermediate
    N1, // Advanced
}

impl JlptLevel {
    /// Parse a service tag such as `jlpt-n5`; bare `N5` is accepted too
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_uppercase();
        let level = tag.strip_prefix("JLPT-").unwrap_or(&tag);

        match level {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "Beginner",
            JlptLevel::N4 => "Elementary",
            JlptLevel::N3 => "Intermediate",
            JlptLevel::N2 => "Upper Intermediate",
            JlptLevel::N1 => "Advanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(JlptLevel::from_tag("jlpt-n5"), Some(JlptLevel::N5));
        assert_eq!(JlptLevel::from_tag("JLPT-N1"), Some(JlptLevel::N1));
        assert_eq!(JlptLevel::from_tag("n3"), Some(JlptLevel::N3));
        assert_eq!(JlptLevel::from_tag(""), None);
        assert_eq!(JlptLevel::from_tag("jlpt-n6"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(JlptLevel::N5.label(), "Beginner");
        assert_eq!(JlptLevel::N1.label(), "Advanced");
    }
}
