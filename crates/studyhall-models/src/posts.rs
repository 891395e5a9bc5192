//! Community forum post models and DTOs.
//!
//! Posts go through the same list/mutate loop as the admin resources; they
//! exist here mostly to keep the [`Resource`](crate::resource::Resource)
//! contract honest beyond the course-management types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::PostId;
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub reply_count: i64,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePostDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdatePostDto {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PostFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Resource for Post {
    const COLLECTION: &'static str = "posts";

    type Id = PostId;
    type Filter = PostFilter;
    type Create = CreatePostDto;
    type Update = UpdatePostDto;

    fn id(&self) -> PostId {
        self.id
    }
}
