use serde::Serialize;

use chroma_classify::Classification;
use chroma_protocol::{legend, TokenClassification};

/// One row of the static legend block.
#[derive(Serialize)]
pub struct LegendEntry {
    pub category: &'static str,
    pub color: &'static str,
}

/// The structured response sent back to JavaScript/React. The host renders
/// it as-is: a colored word list (or the placeholder), the legend, and the
/// status line.
#[derive(Serialize)]
pub struct HighlightReport {
    pub words: Vec<TokenClassification>,
    pub legend: Vec<LegendEntry>,
    pub placeholder: Option<&'static str>,
    pub status: String,
}

/// Shown instead of the word list while there is nothing to display.
const PLACEHOLDER: &str = "Colored words will appear here";

pub fn build_report(classification: &Classification) -> HighlightReport {
    let words = classification.tokens.clone();

    let legend = legend()
        .iter()
        .map(|(category, color)| LegendEntry {
            category: category.label(),
            color: color.as_str(),
        })
        .collect();

    HighlightReport {
        placeholder: if words.is_empty() {
            Some(PLACEHOLDER)
        } else {
            None
        },
        words,
        legend,
        status: classification.status.to_string(),
    }
}
