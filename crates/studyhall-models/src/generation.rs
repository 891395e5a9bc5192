//! AI question generation request and response shapes.
//!
//! Generation is a single long-running `POST /generate`; the client shows a
//! simulated progress display while exactly one response (or failure) is
//! awaited. There is no partial delivery: a failed run produces no questions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::ContentId;
use crate::questions::{QuestionType, QuizQuestion};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct GenerateQuestionsRequest {
    /// The lecture content to generate questions from.
    pub source_id: ContentId,
    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,
    pub question_type: QuestionType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub questions: Vec<QuizQuestion>,
    pub source_id: ContentId,
}
