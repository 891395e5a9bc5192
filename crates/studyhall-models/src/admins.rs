//! Platform administrator account models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::AdminId;
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: AdminId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateAdminDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateAdminDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminFilter {
    /// Matches against name and email server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Resource for AdminUser {
    const COLLECTION: &'static str = "admins";

    type Id = AdminId;
    type Filter = AdminFilter;
    type Create = CreateAdminDto;
    type Update = UpdateAdminDto;

    fn id(&self) -> AdminId {
        self.id
    }
}
