//! Re-joins the clitics nlprule's tokenizer splits off.
//!
//! The tokenizer reports "I'm" as two tokens, "I" + "'m". The widget
//! treats a contraction as a single token carrying only the contraction
//! tag, so clitics are folded back into their host word here.

use chroma_classify::AnalyzedToken;
use chroma_protocol::TagSet;

/// Merges each clitic token into the token before it. The merged token
/// keeps the joined surface text and is tagged contraction only; the
/// individual readings of its parts are discarded.
pub fn merge_contractions(tokens: Vec<AnalyzedToken>) -> Vec<AnalyzedToken> {
    let mut merged: Vec<AnalyzedToken> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if is_clitic(&token.text) {
            // Only fold into an actual word, never into punctuation
            if let Some(host) = merged.last_mut() {
                if !host.has(TagSet::PUNCTUATION) {
                    host.text.push_str(&token.text);
                    host.tags = TagSet::CONTRACTION;
                    continue;
                }
            }
        }
        merged.push(token);
    }

    merged
}

/// A clitic is "n't" or an apostrophe followed by letters ("'m", "'re",
/// "'ll"). A lone apostrophe or quote is not one.
fn is_clitic(text: &str) -> bool {
    if text.eq_ignore_ascii_case("n't") {
        return true;
    }

    let rest = text
        .strip_prefix('\'')
        .or_else(|| text.strip_prefix('\u{2019}'));
    match rest {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}
