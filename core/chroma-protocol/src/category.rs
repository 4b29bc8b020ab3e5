use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

/// The twelve display buckets a token can resolve to. Exactly one is
/// assigned per token; `Other` is the fallback when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Category {
    Article = 0,
    Pronoun = 1,
    Conjunction = 2,
    Preposition = 3,
    Auxiliary = 4,
    Verb = 5,
    Adjective = 6,
    Adverb = 7,
    Noun = 8,
    Punctuation = 9,
    Contraction = 10,
    Other = 11,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 12] = [
        Category::Article,
        Category::Pronoun,
        Category::Conjunction,
        Category::Preposition,
        Category::Auxiliary,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Noun,
        Category::Punctuation,
        Category::Contraction,
        Category::Other,
    ];

    /// The label shown beneath a word and in the legend.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Pronoun => "pronoun",
            Category::Conjunction => "conjunction",
            Category::Preposition => "preposition",
            Category::Auxiliary => "auxiliary",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Noun => "noun",
            Category::Punctuation => "punctuation",
            Category::Contraction => "contraction",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
