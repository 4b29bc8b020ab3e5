use alloc::string::String;

use crate::category::Category;
use crate::palette::Color;

#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

/// One entry of the output sequence: a word, the single category it
/// resolved to, and its display color. Produced fresh on every analysis;
/// carries no identity beyond its position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct TokenClassification {
    pub word: String,
    pub category: Category,
    pub color: Color,
}

impl TokenClassification {
    pub fn new(word: String, category: Category, color: Color) -> Self {
        Self {
            word,
            category,
            color,
        }
    }
}
