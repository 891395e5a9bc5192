//! Course management commands.

use std::sync::Arc;

use clap::Subcommand;
use dialoguer::{Confirm, Input};

use studyhall_client::{ApiClient, ListController, MutationGuard};
use studyhall_core::ApiError;
use studyhall_models::{
    Course, CourseFilter, CourseId, CourseStatus, CreateCourseDto, UpdateCourseDto,
};

use super::PageArgs;

#[derive(Subcommand)]
pub enum CourseCommand {
    /// List courses
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Filter by status (draft, published, archived)
        #[arg(long)]
        status: Option<CourseStatus>,
    },
    /// Create a new course
    Create {
        /// Course title (prompted if not provided)
        #[arg(short = 't', long)]
        title: Option<String>,

        /// Course description
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Initial status (defaults to draft server-side)
        #[arg(short = 's', long)]
        status: Option<CourseStatus>,
    },
    /// Update an existing course
    Update {
        /// Id of the course to update
        id: CourseId,

        #[arg(short = 't', long)]
        title: Option<String>,

        #[arg(short = 'd', long)]
        description: Option<String>,

        #[arg(short = 's', long)]
        status: Option<CourseStatus>,
    },
    /// Delete a course
    Delete {
        /// Id of the course to delete
        id: CourseId,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(client: Arc<ApiClient>, command: CourseCommand) -> Result<(), ApiError> {
    match command {
        CourseCommand::List { page, status } => {
            let list = ListController::<Course>::new(client, page.page_size);
            list.set_filters(CourseFilter {
                search: page.search,
                status,
            })
            .await?;
            if page.page > 1 {
                list.set_page(page.page).await?;
            }

            let snapshot = list.snapshot();
            println!(
                "📚 Courses (page {}/{}, {} total)",
                snapshot.page,
                snapshot.total_pages.max(1),
                snapshot.total
            );
            for course in &snapshot.items {
                println!(
                    "   {}  [{:>9}]  {} ({} lectures, {} students)",
                    course.id,
                    course.status,
                    course.title,
                    course.lecture_count,
                    course.student_count
                );
            }
            Ok(())
        }
        CourseCommand::Create {
            title,
            description,
            status,
        } => {
            let guard = course_guard(client);
            let title = prompt_if_missing(title, "Course title")?;
            let created = guard
                .create(&CreateCourseDto {
                    title,
                    description,
                    status,
                })
                .await?;
            println!("✅ Created course {} ({})", created.title, created.id);
            Ok(())
        }
        CourseCommand::Update {
            id,
            title,
            description,
            status,
        } => {
            let guard = course_guard(client);
            let updated = guard
                .update(
                    id,
                    &UpdateCourseDto {
                        title,
                        description,
                        status,
                    },
                )
                .await?;
            println!("✅ Updated course {} ({})", updated.title, updated.id);
            Ok(())
        }
        CourseCommand::Delete { id, yes } => {
            if !yes && !confirm_destructive(&format!("Delete course {id}?"))? {
                println!("Aborted.");
                return Ok(());
            }
            let guard = course_guard(client);
            guard.delete(id).await?;
            println!("✅ Deleted course {id}");
            Ok(())
        }
    }
}

fn course_guard(client: Arc<ApiClient>) -> MutationGuard<Course> {
    let list = ListController::<Course>::new(client.clone(), 10);
    MutationGuard::new(client, list)
}

pub(crate) fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String, ApiError> {
    match value {
        Some(v) => Ok(v),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| ApiError::validation(anyhow::anyhow!("failed to read input: {e}"))),
    }
}

pub(crate) fn confirm_destructive(prompt: &str) -> Result<bool, ApiError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ApiError::validation(anyhow::anyhow!("failed to read confirmation: {e}")))
}
