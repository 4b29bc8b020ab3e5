use core::fmt;

use crate::category::Category;
use crate::tags::TagSet;

/// A `#RRGGBB` color. Always one of the palette constants below, so it can
/// stay a borrowed `'static` string all the way to the render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Serde support for Color (plain hex string on the wire)
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One classification rule: a token whose tags intersect `tags` falls into
/// `category` and is displayed in `color`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub tags: TagSet,
    pub category: Category,
    pub color: Color,
}

/// The category table. Evaluated top to bottom, first match wins; a token
/// matching no rule is classified [`Category::Other`]. Process-wide
/// immutable configuration, never user-editable.
pub const RULES: [Rule; 11] = [
    Rule {
        tags: TagSet::DETERMINER.union(TagSet::ARTICLE),
        category: Category::Article,
        color: Color::new("#CC7700"),
    },
    Rule {
        tags: TagSet::PRONOUN,
        category: Category::Pronoun,
        color: Color::new("#4B0082"),
    },
    Rule {
        tags: TagSet::CONJUNCTION,
        category: Category::Conjunction,
        color: Color::new("#8B4513"),
    },
    Rule {
        tags: TagSet::PREPOSITION,
        category: Category::Preposition,
        color: Color::new("#006400"),
    },
    Rule {
        tags: TagSet::AUXILIARY.union(TagSet::MODAL),
        category: Category::Auxiliary,
        color: Color::new("#800080"),
    },
    Rule {
        tags: TagSet::VERB,
        category: Category::Verb,
        color: Color::new("#0000CD"),
    },
    Rule {
        tags: TagSet::ADJECTIVE,
        category: Category::Adjective,
        color: Color::new("#228B22"),
    },
    Rule {
        tags: TagSet::ADVERB,
        category: Category::Adverb,
        color: Color::new("#008B8B"),
    },
    Rule {
        tags: TagSet::NOUN,
        category: Category::Noun,
        color: Color::new("#990000"),
    },
    Rule {
        tags: TagSet::PUNCTUATION,
        category: Category::Punctuation,
        color: Color::new("#555555"),
    },
    Rule {
        tags: TagSet::CONTRACTION,
        category: Category::Contraction,
        color: Color::new("#800080"),
    },
];

/// Display color for the fallback bucket.
pub const OTHER_COLOR: Color = Color::new("#888888");

/// Resolves a tag set to its category: the first rule in [`RULES`] whose
/// predicate intersects the tags.
pub fn categorize(tags: TagSet) -> Category {
    for rule in &RULES {
        if tags.intersects(rule.tags) {
            return rule.category;
        }
    }
    Category::Other
}

/// Display color for a category.
pub fn color_of(category: Category) -> Color {
    for rule in &RULES {
        if rule.category == category {
            return rule.color;
        }
    }
    OTHER_COLOR
}

/// Every category with its color, for the static legend block. Complete
/// regardless of which categories occur in the current text.
pub fn legend() -> [(Category, Color); 12] {
    Category::ALL.map(|category| (category, color_of(category)))
}
