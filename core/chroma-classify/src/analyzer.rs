use chroma_protocol::TagSet;
use thiserror::Error;

/// Failures surfaced by an [`Analyzer`] implementation.
#[derive(Debug, Clone, Error)]
pub enum AnalyzeError {
    #[error("failed to load language model: {0}")]
    ModelLoad(String),

    #[error("{0}")]
    Analysis(String),
}

/// A token as reported by the external collaborator: its surface text plus
/// the grammatical tags attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    pub text: String,
    pub tags: TagSet,
}

impl AnalyzedToken {
    pub fn new(text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Membership test against the fixed tag vocabulary.
    pub fn has(&self, tags: TagSet) -> bool {
        self.tags.intersects(tags)
    }
}

/// The seam to the external NLP library. All segmentation and tagging
/// happens behind this trait; nothing on our side of it inspects the text
/// beyond the tags the analyzer reports.
pub trait Analyzer {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalyzeError>;
}
