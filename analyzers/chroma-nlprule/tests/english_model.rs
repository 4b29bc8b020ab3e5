//! End-to-end checks against the real English tokenizer model.
//!
//! The model binary is not vendored; point CHROMA_EN_TOKENIZER at an
//! nlprule `en_tokenizer.bin` to run these. Without it every test here
//! passes as a no-op.

use anyhow::Result;

use chroma_classify::Classifier;
use chroma_nlprule::NlpruleAnalyzer;
use chroma_protocol::Category;

fn load_analyzer() -> Option<NlpruleAnalyzer> {
    let path = std::env::var("CHROMA_EN_TOKENIZER").ok()?;
    Some(NlpruleAnalyzer::from_path(path).expect("tokenizer model should load"))
}

#[test]
fn test_sample_passage() -> Result<()> {
    let analyzer = match load_analyzer() {
        Some(analyzer) => analyzer,
        None => return Ok(()),
    };

    let classifier = Classifier::new(analyzer);
    let result = classifier.classify("I'm a student. You're very kind.");
    assert!(!result.is_failed());

    let category_of = |word: &str| {
        result
            .tokens
            .iter()
            .find(|t| t.word == word)
            .map(|t| t.category)
    };

    // Contractions come back re-joined and distinct from plain pronouns
    assert_eq!(category_of("I'm"), Some(Category::Contraction));
    assert_eq!(category_of("You're"), Some(Category::Contraction));

    assert_eq!(category_of("a"), Some(Category::Article));
    assert_eq!(category_of("student"), Some(Category::Noun));
    assert_eq!(category_of("kind"), Some(Category::Adjective));

    let periods = result
        .tokens
        .iter()
        .filter(|t| t.word == "." && t.category == Category::Punctuation)
        .count();
    assert_eq!(periods, 2);

    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let analyzer = match load_analyzer() {
        Some(analyzer) => analyzer,
        None => return Ok(()),
    };

    let classifier = Classifier::new(analyzer);
    let result = classifier.classify("");

    assert!(result.tokens.is_empty());
    assert!(!result.is_failed());

    Ok(())
}

#[test]
fn test_repeated_analysis_is_identical() -> Result<()> {
    let analyzer = match load_analyzer() {
        Some(analyzer) => analyzer,
        None => return Ok(()),
    };

    let classifier = Classifier::new(analyzer);
    let first = classifier.classify("The quick brown fox jumps over the lazy dog.");
    let second = classifier.classify("The quick brown fox jumps over the lazy dog.");

    assert_eq!(first, second);

    Ok(())
}
