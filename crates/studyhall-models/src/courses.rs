//! Course domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::CourseId;
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub status: CourseStatus,
    /// Aggregate counts are recalculated server-side; refetch after mutating.
    pub lecture_count: i64,
    pub student_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Published => "published",
            CourseStatus::Archived => "archived",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CourseStatus::Draft),
            "published" => Ok(CourseStatus::Published),
            "archived" => Ok(CourseStatus::Archived),
            other => Err(format!("unknown course status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Defaults to `draft` server-side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

impl Resource for Course {
    const COLLECTION: &'static str = "courses";

    type Id = CourseId;
    type Filter = CourseFilter;
    type Create = CreateCourseDto;
    type Update = UpdateCourseDto;

    fn id(&self) -> CourseId {
        self.id
    }
}
