use std::fmt;

use chroma_protocol::{categorize, color_of, TokenClassification};

use crate::analyzer::{AnalyzedToken, Analyzer};

/// Outcome of one classification call, displayed verbatim in the widget's
/// status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Parsed { words: usize },
    Failed { reason: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Parsed { words } => write!(f, "parsed {} words", words),
            Status::Failed { reason } => write!(f, "analysis failed: {}", reason),
        }
    }
}

/// The full result of one classify call: the ordered token sequence plus
/// its status. Either every token is classified or none is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tokens: Vec<TokenClassification>,
    pub status: Status,
}

impl Classification {
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            status: Status::Parsed { words: 0 },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, Status::Failed { .. })
    }
}

/// Applies the category table to whatever the analyzer reports.
pub struct Classifier<A> {
    analyzer: A,
}

impl<A: Analyzer> Classifier<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Text -> ordered (word, category, color) sequence.
    ///
    /// Analyzer failures are caught at this boundary: the widget must keep
    /// running on unexpected input, so a failure yields an empty sequence
    /// and the reason travels in the status instead of propagating.
    pub fn classify(&self, text: &str) -> Classification {
        if text.is_empty() {
            return Classification::empty();
        }

        match self.analyzer.analyze(text) {
            Ok(tokens) => {
                let tokens: Vec<TokenClassification> =
                    tokens.into_iter().map(classify_token).collect();
                let words = tokens.len();
                Classification {
                    tokens,
                    status: Status::Parsed { words },
                }
            }
            Err(err) => Classification {
                tokens: Vec::new(),
                status: Status::Failed {
                    reason: err.to_string(),
                },
            },
        }
    }
}

/// First matching rule in the table wins; no match falls back to `Other`.
fn classify_token(token: AnalyzedToken) -> TokenClassification {
    let category = categorize(token.tags);
    TokenClassification {
        word: token.text,
        category,
        color: color_of(category),
    }
}
