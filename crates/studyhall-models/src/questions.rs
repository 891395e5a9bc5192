//! Individual quiz questions and their type rules.
//!
//! The question type decides how `options` and `correct_answer` relate:
//!
//! - `multiple_choice`: at least 2 options, `correct_answer` is the index of
//!   the right one
//! - `true_false`: exactly 2 options
//! - `short_answer`: `options` holds at least one accepted answer and
//!   `correct_answer` indexes the canonical one
//!
//! In every case `correct_answer` must index into `options`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    /// Minimum number of entries `options` must carry for this type.
    #[must_use]
    pub fn min_options(self) -> usize {
        match self {
            QuestionType::MultipleChoice | QuestionType::TrueFalse => 2,
            QuestionType::ShortAnswer => 1,
        }
    }

    /// Exact option count, where the type fixes it.
    #[must_use]
    pub fn fixed_options(self) -> Option<usize> {
        match self {
            QuestionType::TrueFalse => Some(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::ShortAnswer => "short_answer",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "true_false" => Ok(QuestionType::TrueFalse),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_question))]
pub struct QuizQuestion {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`; meaning depends on `question_type`.
    pub correct_answer: u32,
    #[validate(length(max = 2000))]
    pub explanation_en: Option<String>,
    #[validate(length(max = 2000))]
    pub explanation_ar: Option<String>,
    pub question_type: QuestionType,
}

fn validate_question(question: &QuizQuestion) -> Result<(), ValidationError> {
    let count = question.options.len();

    if let Some(exact) = question.question_type.fixed_options() {
        if count != exact {
            return Err(ValidationError::new("option_count_must_be_exact"));
        }
    } else if count < question.question_type.min_options() {
        return Err(ValidationError::new("too_few_options"));
    }

    if question.correct_answer as usize >= count {
        return Err(ValidationError::new("correct_answer_out_of_range"));
    }

    for option in &question.options {
        if option.is_empty() || option.len() > 500 {
            return Err(ValidationError::new("option_length_invalid"));
        }
    }

    Ok(())
}
