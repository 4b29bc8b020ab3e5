//! Binding to the external `nlprule` tagger.
//!
//! All segmentation and part-of-speech tagging is nlprule's work; this
//! crate only loads its serialized English tokenizer model, folds the
//! reported Penn-style tags into the fixed tag vocabulary, and re-joins
//! the clitics the tokenizer splits off ("I" + "'m" -> "I'm").

pub mod contractions;
pub mod tags;

use std::io::Read;
use std::path::Path;

use chroma_classify::{AnalyzeError, AnalyzedToken, Analyzer};
use nlprule::Tokenizer;

use crate::contractions::merge_contractions;

/// [`Analyzer`] backed by an nlprule English tokenizer model.
pub struct NlpruleAnalyzer {
    tokenizer: Tokenizer,
}

impl NlpruleAnalyzer {
    /// Loads the tokenizer model from a reader, e.g. a cursor over bytes
    /// the browser host fetched.
    pub fn from_reader(reader: impl Read) -> Result<Self, AnalyzeError> {
        let tokenizer = Tokenizer::from_reader(reader)
            .map_err(|err| AnalyzeError::ModelLoad(err.to_string()))?;
        Ok(Self { tokenizer })
    }

    /// Loads the tokenizer model from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyzeError> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|err| AnalyzeError::ModelLoad(err.to_string()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl Analyzer for NlpruleAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalyzeError> {
        let mut raw = Vec::new();

        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let surface = token.word().text().as_str().trim();
                if surface.is_empty() {
                    continue;
                }

                let pos_tags = token.word().tags().iter().map(|data| data.pos().as_str());
                raw.push(AnalyzedToken::new(surface, tags::tags_for(surface, pos_tags)));
            }
        }

        Ok(merge_contractions(raw))
    }
}
