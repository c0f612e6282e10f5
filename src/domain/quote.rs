//! Quote value record

/// A single (author, text) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    pub text: String,
}

impl Quote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Quote {
            author: author.into(),
            text: text.into(),
        }
    }

    /// True when the author is present and not just whitespace
    pub fn has_author(&self) -> bool {
        !self.author.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_compare_by_value() {
        let a = Quote::new("Mark Twain", "Get busy living.");
        let b = Quote::new("Mark Twain", "Get busy living.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_has_author_rejects_blank_authors() {
        assert!(Quote::new("Mark Twain", "text").has_author());
        assert!(!Quote::new("", "text").has_author());
        assert!(!Quote::new("   ", "text").has_author());
    }
}
