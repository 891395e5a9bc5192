//! Demo-data seeding through the client.
//!
//! Everything goes through the same mutation path as the interactive
//! commands, so seeded records trigger the usual validate/mutate/refetch
//! sequence against the remote API.

use std::sync::Arc;
use std::time::Instant;

use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::SliceRandom;

use studyhall_client::{ApiClient, ListController, MutationGuard};
use studyhall_core::ApiError;
use studyhall_models::{
    ContentPayload, Course, CourseStatus, CreateContentDto, CreateCourseDto, LectureContent,
    LectureId,
};

pub async fn run(
    client: Arc<ApiClient>,
    courses: usize,
    contents_per_course: usize,
) -> Result<(), ApiError> {
    let start = Instant::now();
    println!("📚 Seeding {courses} demo courses with {contents_per_course} contents each...");

    let course_list = ListController::<Course>::new(client.clone(), 10);
    let course_guard = MutationGuard::new(client.clone(), course_list);

    let content_list = ListController::<LectureContent>::new(client.clone(), 100);
    let content_guard = MutationGuard::new(client, content_list);

    let statuses = [
        CourseStatus::Draft,
        CourseStatus::Published,
        CourseStatus::Archived,
    ];

    for _ in 0..courses {
        let mut rng = rand::thread_rng();
        let dto = CreateCourseDto {
            title: CatchPhrase().fake(),
            description: Some(Sentence(8..20).fake()),
            status: statuses.choose(&mut rng).copied(),
        };
        drop(rng);

        let course = course_guard.create(&dto).await?;
        println!("   ✓ {} ({})", course.title, course.id);

        // Demo contents hang off a fresh lecture per course; the API creates
        // the lecture on first reference.
        let lecture_id = LectureId::new();
        for position in 0..contents_per_course {
            let content = fake_content(lecture_id, position as i32);
            content_guard.create(&content).await?;
        }
    }

    println!(
        "✅ Seeded {} courses ({} contents) in {:?}",
        courses,
        courses * contents_per_course,
        start.elapsed()
    );
    Ok(())
}

fn fake_content(lecture_id: LectureId, position: i32) -> CreateContentDto {
    let mut rng = rand::thread_rng();
    let title: String = Sentence(3..8).fake();

    let payload = if rng.gen_bool(0.6) {
        ContentPayload::Video {
            url: format!("https://cdn.example.com/videos/{}.mp4", rng.gen_range(1000..9999)),
            duration_secs: rng.gen_range(60..=1800),
        }
    } else {
        ContentPayload::Document {
            url: format!("https://cdn.example.com/docs/{}.pdf", rng.gen_range(1000..9999)),
            page_count: Some(rng.gen_range(2..=40)),
        }
    };

    CreateContentDto {
        lecture_id,
        title,
        position: Some(position),
        payload,
    }
}
