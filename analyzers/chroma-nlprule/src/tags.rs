//! Folds nlprule's Penn-style POS strings into the fixed tag vocabulary.

use chroma_protocol::TagSet;

/// Finite be/have/do forms. The tagger reports them as plain verbs; the
/// widget displays them as auxiliaries.
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did",
];

/// Tag set for one token: the union over all POS readings the tagger
/// reports, plus the surface-form tags (article, auxiliary, punctuation)
/// the Penn tag set does not distinguish.
pub fn tags_for<'a>(text: &str, pos_tags: impl Iterator<Item = &'a str>) -> TagSet {
    let mut tags = TagSet::empty();
    for pos in pos_tags {
        tags |= tags_for_pos(pos);
    }

    if is_punctuation(text) {
        tags |= TagSet::PUNCTUATION;
    }
    if tags.contains(TagSet::DETERMINER) && is_article(text) {
        tags |= TagSet::ARTICLE;
    }
    if tags.contains(TagSet::VERB) && is_auxiliary(text) {
        tags |= TagSet::AUXILIARY;
    }

    tags
}

/// One Penn-style tag -> vocabulary flags. Tags outside the vocabulary
/// (CD, UH, FW, SENT_START, ...) contribute nothing and leave the token
/// to the fallback bucket.
fn tags_for_pos(pos: &str) -> TagSet {
    match pos {
        "DT" | "PDT" | "WDT" => TagSet::DETERMINER,
        "PRP" | "PRP$" | "WP" | "WP$" => TagSet::PRONOUN,
        "CC" => TagSet::CONJUNCTION,
        "IN" | "TO" => TagSet::PREPOSITION,
        "MD" => TagSet::MODAL | TagSet::AUXILIARY,
        "WRB" => TagSet::ADVERB,
        _ if pos.starts_with("VB") => TagSet::VERB,
        _ if pos.starts_with("JJ") => TagSet::ADJECTIVE,
        _ if pos.starts_with("RB") => TagSet::ADVERB,
        _ if pos.starts_with("NN") => TagSet::NOUN,
        _ if !pos.is_empty() && pos.chars().all(|c| c.is_ascii_punctuation()) => {
            TagSet::PUNCTUATION
        }
        _ => TagSet::empty(),
    }
}

fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| !c.is_alphanumeric())
}

fn is_article(text: &str) -> bool {
    text.eq_ignore_ascii_case("a") || text.eq_ignore_ascii_case("an") || text.eq_ignore_ascii_case("the")
}

fn is_auxiliary(text: &str) -> bool {
    AUXILIARIES
        .iter()
        .any(|aux| text.eq_ignore_ascii_case(aux))
}
