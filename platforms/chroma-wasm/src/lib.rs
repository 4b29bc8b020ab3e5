//! Browser platform for the Chroma highlighter.
//!
//! The JS host dynamic-imports this module after hydration and constructs
//! the engine from model bytes it fetched, so nothing here ever runs
//! during server-side prerendering. The crate touches no DOM; it hands a
//! serialized [`report::HighlightReport`] to the host and the host renders
//! it.

use wasm_bindgen::prelude::*;

use chroma_classify::Session;
use chroma_nlprule::NlpruleAnalyzer;

pub mod report;

use report::build_report;

/// Sample passage pre-filled into the input box on first load.
pub const SAMPLE_TEXT: &str = "I'm a student. You're very kind.";

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn sample_text() -> String {
    SAMPLE_TEXT.to_string()
}

/// The engine instance running in the browser.
#[wasm_bindgen]
pub struct HighlightEngine {
    session: Session<NlpruleAnalyzer>,
}

#[wasm_bindgen]
impl HighlightEngine {
    /// `model` is the serialized English tokenizer the host fetched.
    /// Without a valid model there is no engine; load failures surface to
    /// JS as a constructor exception.
    #[wasm_bindgen(constructor)]
    pub fn new(model: Vec<u8>) -> Result<HighlightEngine, JsValue> {
        let analyzer = NlpruleAnalyzer::from_reader(std::io::Cursor::new(model))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(Self {
            session: Session::with_text(analyzer, SAMPLE_TEXT),
        })
    }

    /// The main loop: text -> tagger -> category table -> report.
    pub fn analyze(&mut self, input: &str) -> JsValue {
        self.set_text(input);
        self.report()
    }

    /// Replaces the session text and re-runs classification. The previous
    /// result is dropped wholesale.
    pub fn set_text(&mut self, input: &str) {
        self.session.set_text(input);
    }

    /// The current render model: colored words (or placeholder), the full
    /// legend, and the status line.
    pub fn report(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&build_report(self.session.current())).unwrap()
    }

    /// The text currently held by the session.
    pub fn text(&self) -> String {
        self.session.text().to_string()
    }
}
