use crate::analyzer::Analyzer;
use crate::classifier::{Classification, Classifier};

/// Owns the input-surface state: the current text and its classification.
/// Every text change replaces both wholesale; there is no incremental
/// update and no history.
pub struct Session<A> {
    classifier: Classifier<A>,
    text: String,
    current: Classification,
}

impl<A: Analyzer> Session<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            classifier: Classifier::new(analyzer),
            text: String::new(),
            current: Classification::empty(),
        }
    }

    /// Pre-fills the session with `text` and analyzes it immediately, like
    /// the widget does with its sample passage on mount.
    pub fn with_text(analyzer: A, text: &str) -> Self {
        let mut session = Self::new(analyzer);
        session.set_text(text);
        session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn current(&self) -> &Classification {
        &self.current
    }

    /// Stores the new text and re-runs classification. The previous result
    /// is dropped entirely, never merged into.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.current = self.classifier.classify(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalyzeError, AnalyzedToken, Analyzer};
    use chroma_protocol::TagSet;

    struct SplitAnalyzer;

    impl Analyzer for SplitAnalyzer {
        fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalyzeError> {
            Ok(text
                .split_whitespace()
                .map(|word| AnalyzedToken::new(word, TagSet::NOUN))
                .collect())
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(SplitAnalyzer);

        assert_eq!(session.text(), "");
        assert!(session.current().tokens.is_empty());
    }

    #[test]
    fn test_with_text_analyzes_immediately() {
        let session = Session::with_text(SplitAnalyzer, "one two");

        assert_eq!(session.text(), "one two");
        assert_eq!(session.current().tokens.len(), 2);
    }

    #[test]
    fn test_set_text_replaces_wholesale() {
        let mut session = Session::with_text(SplitAnalyzer, "one two three");
        assert_eq!(session.current().tokens.len(), 3);

        session.set_text("four");

        // Nothing from the previous text survives
        assert_eq!(session.current().tokens.len(), 1);
        assert_eq!(session.current().tokens[0].word, "four");
        assert!(!session
            .current()
            .tokens
            .iter()
            .any(|t| t.word == "one" || t.word == "two" || t.word == "three"));
    }

    #[test]
    fn test_clearing_text_clears_the_result() {
        let mut session = Session::with_text(SplitAnalyzer, "one");

        session.set_text("");

        assert!(session.current().tokens.is_empty());
        assert_eq!(session.current().status.to_string(), "parsed 0 words");
    }
}
