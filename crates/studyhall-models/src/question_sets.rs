//! Question set models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{CourseId, QuestionSetId};
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: QuestionSetId,
    pub course_id: CourseId,
    pub title: String,
    pub difficulty: Difficulty,
    /// Maintained server-side as questions are added and removed.
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateQuestionSetDto {
    pub course_id: CourseId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateQuestionSetDto {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionSetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Resource for QuestionSet {
    const COLLECTION: &'static str = "question-sets";

    type Id = QuestionSetId;
    type Filter = QuestionSetFilter;
    type Create = CreateQuestionSetDto;
    type Update = UpdateQuestionSetDto;

    fn id(&self) -> QuestionSetId {
        self.id
    }
}
