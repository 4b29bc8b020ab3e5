#![no_std] // Critical for WASM compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod palette;
pub mod tags;

// Re-export core types for convenience
pub use category::Category;
pub use palette::{categorize, color_of, legend, Color, Rule, OTHER_COLOR, RULES};
pub use tags::TagSet;

pub mod model;
pub use model::TokenClassification;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_layout() {
        // Verify zero-cost abstraction: Category should be exactly 1 byte
        assert_eq!(core::mem::size_of::<Category>(), 1);
    }

    #[test]
    fn test_categorize_smoke() {
        assert_eq!(categorize(TagSet::NOUN), Category::Noun);
        assert_eq!(categorize(TagSet::empty()), Category::Other);

        // Determiner outranks noun, whatever else the token carries
        assert_eq!(
            categorize(TagSet::DETERMINER | TagSet::NOUN),
            Category::Article
        );
    }

    #[test]
    fn test_legend_is_complete() {
        let entries = legend();
        assert_eq!(entries.len(), Category::ALL.len());

        for (i, (category, _color)) in entries.iter().enumerate() {
            assert_eq!(*category, Category::ALL[i]);
        }
    }
}
