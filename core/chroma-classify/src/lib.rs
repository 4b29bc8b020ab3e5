//! The application logic between the external tagger and the render
//! boundary: a narrow [`Analyzer`] seam, the [`Classifier`] that applies
//! the category table, and the [`Session`] owning the input-surface state.

pub mod analyzer;
pub mod classifier;
pub mod session;

pub use analyzer::{AnalyzeError, AnalyzedToken, Analyzer};
pub use classifier::{Classification, Classifier, Status};
pub use session::Session;
