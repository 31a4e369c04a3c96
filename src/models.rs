use serde::{Deserialize, Serialize};

/// Result types for the analysis tasks. Field names mirror the JSON the
/// model is asked to produce, so deserialization is direct. Beyond being
/// valid JSON with these shapes, the model's output is trusted structurally:
/// missing optional collections default to empty rather than failing.

/// A single misspelling found in the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckError {
    pub incorrect_word: String,
    pub corrected_word: String,
    /// Surrounding sentence fragment, for locating the error in the document
    #[serde(default)]
    pub context: String,
}

/// A document-format (thể thức văn bản) problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatError {
    pub error_type: String,
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckResult {
    pub has_errors: bool,
    #[serde(default)]
    pub errors: Vec<SpellCheckError>,
    #[serde(default)]
    pub format_errors: Vec<FormatError>,
}

/// Severity of a legal feedback item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Suggestion,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalFeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// The clause the feedback refers to, quoted from the document
    pub clause: String,
    pub comment: String,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalEvaluationResult {
    /// Overall legal-soundness score from 0 to 100
    pub legal_score: u8,
    #[serde(default)]
    pub feedback: Vec<LegalFeedbackItem>,
}

/// A pair of matching passages, one from each compared document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityMatch {
    pub text_from_file1: String,
    pub text_from_file2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Percentage from 0 to 100
    pub similarity_score: f64,
    #[serde(default)]
    pub matches: Vec<SimilarityMatch>,
}

/// Free-form markdown returned by the contract-details task (not parsed)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractDetails {
    pub details: String,
}

/// Plain text recovered from an image or scanned document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrResult {
    pub text: String,
}
