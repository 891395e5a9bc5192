//! In-process mock of the platform API for integration tests.
//!
//! The mock serves the same REST shape the real API does, backed by
//! in-memory stores. Tests tune its behaviour through [`MockState`]:
//! per-page response delays (for racing stale responses), a mutation delay
//! (for observing pending flags), and a failure switch for the generation
//! endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    courses: Mutex<Vec<Value>>,
    contents: Mutex<Vec<Value>>,
    /// Page number whose list responses are delayed, with the delay itself.
    delayed_page: AtomicU64,
    list_delay_ms: AtomicU64,
    /// Delay applied to delete requests.
    mutation_delay_ms: AtomicU64,
    generation_delay_ms: AtomicU64,
    fail_generation: AtomicBool,
    create_hits: AtomicU64,
    reorder_hits: AtomicU64,
    generate_hits: AtomicU64,
}

#[allow(dead_code)]
impl MockState {
    pub fn seed_courses(&self, count: usize) -> Vec<Uuid> {
        let mut courses = self.inner.courses.lock().unwrap();
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let id = Uuid::new_v4();
            ids.push(id);
            courses.push(course_json(id, &format!("Course {i:02}"), "draft"));
        }
        ids
    }

    /// Seeds one lecture's contents at positions `1..=count`.
    pub fn seed_contents(&self, lecture_id: Uuid, count: usize) -> Vec<Uuid> {
        let mut contents = self.inner.contents.lock().unwrap();
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let id = Uuid::new_v4();
            ids.push(id);
            contents.push(json!({
                "id": id,
                "lecture_id": lecture_id,
                "title": format!("Content {}", i + 1),
                "position": (i + 1) as i32,
                "content_type": "video",
                "url": format!("https://cdn.example.com/{}.mp4", i + 1),
                "duration_secs": 300,
                "created_at": Utc::now().to_rfc3339(),
                "updated_at": Utc::now().to_rfc3339(),
            }));
        }
        ids
    }

    pub fn delay_list_page(&self, page: u64, delay: Duration) {
        self.inner.delayed_page.store(page, Ordering::SeqCst);
        self.inner
            .list_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn delay_mutations(&self, delay: Duration) {
        self.inner
            .mutation_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn delay_generation(&self, delay: Duration) {
        self.inner
            .generation_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn fail_generation(&self, fail: bool) {
        self.inner.fail_generation.store(fail, Ordering::SeqCst);
    }

    pub fn create_hits(&self) -> u64 {
        self.inner.create_hits.load(Ordering::SeqCst)
    }

    pub fn reorder_hits(&self) -> u64 {
        self.inner.reorder_hits.load(Ordering::SeqCst)
    }

    pub fn generate_hits(&self) -> u64 {
        self.inner.generate_hits.load(Ordering::SeqCst)
    }

    pub fn content_positions(&self) -> Vec<(Uuid, i32)> {
        let mut rows: Vec<(Uuid, i32)> = self
            .inner
            .contents
            .lock()
            .unwrap()
            .iter()
            .map(|c| {
                (
                    c["id"].as_str().unwrap().parse().unwrap(),
                    c["position"].as_i64().unwrap() as i32,
                )
            })
            .collect();
        rows.sort_by_key(|(_, position)| *position);
        rows
    }

    pub fn course_count(&self) -> usize {
        self.inner.courses.lock().unwrap().len()
    }
}

pub struct MockApi {
    pub base_url: String,
    pub state: MockState,
}

/// Binds the mock to an ephemeral port and serves it in the background for
/// the rest of the test.
pub async fn spawn_mock_api() -> MockApi {
    let state = MockState::default();

    let app = Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .route("/lecture-contents", get(list_contents))
        .route("/lecture-contents/reorder", post(reorder_contents))
        .route("/generate", post(generate))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock api");
    let addr = listener.local_addr().expect("mock api has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock api crashed");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn course_json(id: Uuid, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "status": status,
        "lecture_count": 0,
        "student_count": 0,
        "created_at": Utc::now().to_rfc3339(),
        "updated_at": Utc::now().to_rfc3339(),
    })
}

fn paginate(items: Vec<Value>, params: &HashMap<String, String>) -> Value {
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let page_size: usize = params
        .get("page_size")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10);

    let total = items.len();
    let total_pages = total.div_ceil(page_size.max(1));
    let start = (page.saturating_sub(1)) * page_size;
    let page_items: Vec<Value> = items.into_iter().skip(start).take(page_size).collect();

    json!({
        "items": page_items,
        "total": total,
        "total_pages": total_pages,
    })
}

async fn apply_list_delay(state: &MockState, params: &HashMap<String, String>) {
    let delayed_page = state.inner.delayed_page.load(Ordering::SeqCst);
    let requested: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    if delayed_page != 0 && delayed_page == requested {
        let delay = state.inner.list_delay_ms.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

async fn list_courses(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    apply_list_delay(&state, &params).await;

    let courses = state.inner.courses.lock().unwrap().clone();
    let filtered: Vec<Value> = courses
        .into_iter()
        .filter(|c| {
            params
                .get("search")
                .is_none_or(|s| c["title"].as_str().unwrap_or("").contains(s.as_str()))
        })
        .filter(|c| {
            params
                .get("status")
                .is_none_or(|s| c["status"].as_str() == Some(s.as_str()))
        })
        .collect();

    Json(paginate(filtered, &params))
}

async fn create_course(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.inner.create_hits.fetch_add(1, Ordering::SeqCst);

    let course = course_json(
        Uuid::new_v4(),
        body["title"].as_str().unwrap_or(""),
        body["status"].as_str().unwrap_or("draft"),
    );
    state.inner.courses.lock().unwrap().push(course.clone());

    (StatusCode::CREATED, Json(course))
}

async fn get_course(State(state): State<MockState>, Path(id): Path<Uuid>) -> Response {
    let courses = state.inner.courses.lock().unwrap();
    match courses
        .iter()
        .find(|c| c["id"].as_str() == Some(id.to_string().as_str()))
    {
        Some(course) => Json(course.clone()).into_response(),
        None => not_found("course not found"),
    }
}

async fn update_course(
    State(state): State<MockState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Response {
    let mut courses = state.inner.courses.lock().unwrap();
    let Some(course) = courses
        .iter_mut()
        .find(|c| c["id"].as_str() == Some(id.to_string().as_str()))
    else {
        return not_found("course not found");
    };

    if let Some(title) = body.get("title").and_then(Value::as_str) {
        course["title"] = json!(title);
    }
    if let Some(status) = body.get("status").and_then(Value::as_str) {
        course["status"] = json!(status);
    }
    course["updated_at"] = json!(Utc::now().to_rfc3339());

    Json(course.clone()).into_response()
}

async fn delete_course(State(state): State<MockState>, Path(id): Path<Uuid>) -> Response {
    let delay = state.inner.mutation_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let mut courses = state.inner.courses.lock().unwrap();
    let before = courses.len();
    courses.retain(|c| c["id"].as_str() != Some(id.to_string().as_str()));

    if courses.len() == before {
        return not_found("course not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_contents(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    apply_list_delay(&state, &params).await;

    let mut contents: Vec<Value> = state
        .inner
        .contents
        .lock()
        .unwrap()
        .iter()
        .filter(|c| {
            params
                .get("lecture_id")
                .is_none_or(|l| c["lecture_id"].as_str() == Some(l.as_str()))
        })
        .cloned()
        .collect();
    contents.sort_by_key(|c| c["position"].as_i64().unwrap_or(0));

    Json(paginate(contents, &params))
}

/// Applies every move or none: unknown ids reject the whole request before
/// anything is written.
async fn reorder_contents(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.inner.reorder_hits.fetch_add(1, Ordering::SeqCst);

    let Some(moves) = body["moves"].as_array() else {
        return unprocessable("moves array required");
    };

    let mut contents = state.inner.contents.lock().unwrap();
    for mv in moves {
        let id = mv["id"].as_str().unwrap_or("");
        if !contents.iter().any(|c| c["id"].as_str() == Some(id)) {
            return unprocessable("unknown content id in reorder");
        }
    }

    for mv in moves {
        let id = mv["id"].as_str().unwrap_or("");
        let position = mv["position"].as_i64().unwrap_or(0);
        if let Some(content) = contents.iter_mut().find(|c| c["id"].as_str() == Some(id)) {
            content["position"] = json!(position);
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn generate(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.inner.generate_hits.fetch_add(1, Ordering::SeqCst);

    let delay = state.inner.generation_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if state.inner.fail_generation.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "generation backend unavailable"})),
        )
            .into_response();
    }

    let count = body["question_count"].as_u64().unwrap_or(0);
    let question_type = body["question_type"].as_str().unwrap_or("multiple_choice");
    let questions: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "question": format!("Generated question {}", i + 1),
                "options": ["Option A", "Option B", "Option C", "Option D"],
                "correct_answer": 0,
                "explanation_en": "Because of reasons.",
                "explanation_ar": "لأسباب.",
                "question_type": question_type,
            })
        })
        .collect();

    Json(json!({
        "questions": questions,
        "source_id": body["source_id"],
    }))
    .into_response()
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": message}))).into_response()
}

fn unprocessable(message: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": message})),
    )
        .into_response()
}
