//! Lecture content models and DTOs.
//!
//! Contents are the orderable items inside a lecture: videos, documents, and
//! attached quizzes. The variant-specific fields live in a tagged
//! [`ContentPayload`] union rather than a bag of nullable columns, so a
//! `video` record can never carry stray quiz fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::ids::{ContentId, LectureId, QuestionSetId};
use crate::resource::{Ordered, Resource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureContent {
    pub id: ContentId,
    pub lecture_id: LectureId,
    pub title: String,
    /// Ordinal within the lecture; unique per lecture server-side.
    pub position: i32,
    #[serde(flatten)]
    pub payload: ContentPayload,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Variant-specific content fields, discriminated by `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum ContentPayload {
    Video {
        url: String,
        duration_secs: i64,
    },
    Document {
        url: String,
        page_count: Option<i32>,
    },
    Quiz {
        question_set_id: QuestionSetId,
        question_count: i32,
        /// Percentage in [0, 100] required to pass.
        passing_score: i32,
    },
}

impl ContentPayload {
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self {
            ContentPayload::Video { .. } => "video",
            ContentPayload::Document { .. } => "document",
            ContentPayload::Quiz { .. } => "quiz",
        }
    }
}

fn validate_payload(payload: &ContentPayload) -> Result<(), ValidationError> {
    match payload {
        ContentPayload::Video { url, duration_secs } => {
            if url.is_empty() {
                return Err(ValidationError::new("video_url_required"));
            }
            if *duration_secs <= 0 {
                return Err(ValidationError::new("video_duration_invalid"));
            }
        }
        ContentPayload::Document { url, .. } => {
            if url.is_empty() {
                return Err(ValidationError::new("document_url_required"));
            }
        }
        ContentPayload::Quiz {
            question_count,
            passing_score,
            ..
        } => {
            if *question_count <= 0 {
                return Err(ValidationError::new("quiz_question_count_invalid"));
            }
            if !(0..=100).contains(passing_score) {
                return Err(ValidationError::new("quiz_passing_score_out_of_range"));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateContentDto {
    pub lecture_id: LectureId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Appended at the end of the lecture when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(flatten)]
    #[validate(custom(function = validate_payload))]
    pub payload: ContentPayload,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateContentDto {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Replaces the whole payload; variants are never merged field-by-field.
    #[serde(flatten)]
    #[validate(custom(function = validate_payload))]
    pub payload: Option<ContentPayload>,
}

impl Default for UpdateContentDto {
    fn default() -> Self {
        Self {
            title: None,
            position: None,
            payload: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecture_id: Option<LectureId>,
    /// Contents render in ordinal order; the server sorts.
    pub sort: String,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self {
            lecture_id: None,
            sort: "position".to_string(),
        }
    }
}

impl ContentFilter {
    #[must_use]
    pub fn for_lecture(lecture_id: LectureId) -> Self {
        Self {
            lecture_id: Some(lecture_id),
            ..Self::default()
        }
    }
}

impl Resource for LectureContent {
    const COLLECTION: &'static str = "lecture-contents";

    type Id = ContentId;
    type Filter = ContentFilter;
    type Create = CreateContentDto;
    type Update = UpdateContentDto;

    fn id(&self) -> ContentId {
        self.id
    }
}

impl Ordered for LectureContent {
    fn position(&self) -> i32 {
        self.position
    }
}
