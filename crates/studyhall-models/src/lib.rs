//! # Studyhall Models
//!
//! Domain models and DTOs for the Studyhall admin client.
//!
//! Every record here is server-owned; client-held copies are caches that are
//! invalidated by refetching after any mutation. Types come in the usual
//! trio: the resource itself, create/update DTOs with `validator` schemas,
//! and a filter struct serialized into list query parameters.
//!
//! # Modules
//!
//! - [`resource`]: The [`Resource`]/[`Ordered`] traits the client is generic over
//! - [`ids`]: Strongly-typed ID newtypes
//! - [`courses`]: Course catalog records
//! - [`admins`]: Platform administrator accounts
//! - [`contents`]: Orderable lecture content items with tagged payloads
//! - [`question_sets`]: Quiz question sets and their questions
//! - [`questions`]: Individual quiz questions and their type rules
//! - [`generation`]: AI question generation request/response shapes
//! - [`posts`]: Community forum posts
//! - [`session`]: The read-only auth capability injected into the client

pub mod admins;
pub mod contents;
pub mod courses;
pub mod generation;
pub mod ids;
pub mod posts;
pub mod question_sets;
pub mod questions;
pub mod resource;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use resource::{Ordered, Resource};

pub use ids::{AdminId, ContentId, CourseId, LectureId, PostId, QuestionSetId, UserId};

pub use admins::{AdminFilter, AdminUser, CreateAdminDto, UpdateAdminDto};
pub use contents::{
    ContentFilter, ContentPayload, CreateContentDto, LectureContent, UpdateContentDto,
};
pub use courses::{Course, CourseFilter, CourseStatus, CreateCourseDto, UpdateCourseDto};
pub use generation::{GenerateQuestionsRequest, GenerationResponse};
pub use posts::{CreatePostDto, Post, PostFilter, UpdatePostDto};
pub use question_sets::{
    CreateQuestionSetDto, Difficulty, QuestionSet, QuestionSetFilter, UpdateQuestionSetDto,
};
pub use questions::{QuestionType, QuizQuestion};
pub use session::{CurrentUser, Session};
