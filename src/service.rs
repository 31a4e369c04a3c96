use crate::gateway::{parse_reply_as, GenerativeProvider, ResponseFormat};
use crate::models::{ComparisonResult, ContractDetails, LegalEvaluationResult, SpellCheckResult};
use crate::utils;
use anyhow::Result;
use std::sync::Arc;

/// Longest document slice embedded into a single prompt. Contracts rarely
/// come close; the cap protects against runaway OCR output.
const MAX_PROMPT_DOC_CHARS: usize = 30_000;

/// Runs the analysis tasks against a generative provider. Stateless: every
/// method is one prompt, one round trip, one parsed result.
pub struct Analyzer {
    provider: Arc<dyn GenerativeProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Spelling and document-format check for a Vietnamese legal document
    pub async fn check_spelling(
        &self,
        text: &str,
        contract_name: &str,
    ) -> Result<SpellCheckResult> {
        let prompt = format!(
            "Bạn là chuyên gia pháp lý. Hãy kiểm tra lỗi chính tả và thể thức văn bản \
             tiếng Việt cho tài liệu sau (loại: {contract_name}). Trả về JSON với các \
             trường: hasErrors (boolean), errors (mảng các đối tượng {{incorrectWord, \
             correctedWord, context}}), formatErrors (mảng các đối tượng {{errorType, \
             description, recommendation}}).\n\nNội dung: {}",
            utils::truncate_chars(text, MAX_PROMPT_DOC_CHARS)
        );

        let reply = self.provider.generate(&prompt, ResponseFormat::Json).await?;
        parse_reply_as(&reply)
    }

    /// Legal-risk score (0-100) plus per-clause feedback
    pub async fn evaluate_legality(
        &self,
        text: &str,
        contract_name: &str,
    ) -> Result<LegalEvaluationResult> {
        let prompt = format!(
            "Phân tích các rủi ro pháp lý và điểm số cho hợp đồng: {contract_name}. \
             Trả về JSON với các trường: legalScore (số nguyên 0-100), feedback (mảng \
             các đối tượng {{type: \"suggestion\" | \"warning\" | \"critical\", clause, \
             comment, recommendation}}).\n\nNội dung: {}",
            utils::truncate_chars(text, MAX_PROMPT_DOC_CHARS)
        );

        let reply = self.provider.generate(&prompt, ResponseFormat::Json).await?;
        parse_reply_as(&reply)
    }

    /// Similarity percentage and matched passages between two documents
    pub async fn compare_documents(
        &self,
        text1: &str,
        text2: &str,
    ) -> Result<ComparisonResult> {
        let prompt = format!(
            "So sánh hai tài liệu pháp lý sau và trả về các đoạn trùng khớp trong định \
             dạng JSON với các trường: similarityScore (phần trăm 0-100), matches (mảng \
             các đối tượng {{textFromFile1, textFromFile2}}).\nTài liệu 1: {}\nTài liệu 2: {}",
            utils::truncate_chars(text1, MAX_PROMPT_DOC_CHARS / 2),
            utils::truncate_chars(text2, MAX_PROMPT_DOC_CHARS / 2)
        );

        let reply = self.provider.generate(&prompt, ResponseFormat::Json).await?;
        parse_reply_as(&reply)
    }

    /// Current regulations and template annexes for a contract type.
    /// Free-form markdown, passed through unparsed.
    pub async fn contract_details(&self, contract_name: &str) -> Result<ContractDetails> {
        let prompt = format!(
            "Cung cấp chi tiết quy định pháp luật hiện hành và mẫu phụ lục cho: {contract_name}"
        );

        let details = self.provider.generate(&prompt, ResponseFormat::Text).await?;
        Ok(ContractDetails { details })
    }
}
