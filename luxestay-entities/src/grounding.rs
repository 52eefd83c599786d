//! Partial records of a grounded answer.
//!
//! The generative backend may omit any of these fields,
//! so everything except the list of chunks is optional.

/// The loosely structured answer of a location grounded
/// content generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundedAnswer {
    pub text: Option<String>,
    pub chunks: Vec<GroundingChunk>,
}

/// A fragment that links the generated text to a real place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
    pub review_snippets: Option<Vec<String>>,
}
