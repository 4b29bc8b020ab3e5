#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

use bitflags::bitflags;

bitflags! {
    /// The fixed vocabulary of grammatical tags the tagger can attach to a
    /// token. A token carries a set of these; category resolution is a
    /// membership test against the rule table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeSerialize))]
    pub struct TagSet: u32 {
        // Function words (Bits 0-6)
        const DETERMINER = 1;
        const ARTICLE = 2;
        const PRONOUN = 4;
        const CONJUNCTION = 8;
        const PREPOSITION = 16;
        const AUXILIARY = 32;
        const MODAL = 64;

        // Content words (Bits 7-10)
        const VERB = 128;
        const ADJECTIVE = 256;
        const ADVERB = 512;
        const NOUN = 1024;

        // Surface forms (Bits 11-12)
        const PUNCTUATION = 2048;
        const CONTRACTION = 4096;
    }
}
