mod common;

use std::sync::Arc;
use std::time::Duration;

use common::spawn_mock_api;

use studyhall_client::{ApiClient, ListController, MutationGuard};
use studyhall_config::ApiConfig;
use studyhall_core::ErrorKind;
use studyhall_models::{Course, CourseFilter, CourseId, CreateCourseDto};

async fn client_for(base_url: &str) -> Arc<ApiClient> {
    let config = ApiConfig::for_base_url(base_url);
    Arc::new(ApiClient::new(&config, studyhall_models::Session::anonymous()).unwrap())
}

#[tokio::test]
async fn test_list_paginates_and_reports_totals() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(25);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);
    list.refresh().await.unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.items.len(), 10);
    assert_eq!(snapshot.total, 25);
    assert_eq!(snapshot.total_pages, 3);
    assert_eq!(snapshot.page, 1);
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn test_out_of_range_page_clamps_to_last() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(25);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);
    list.set_page(99).await.unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.page, 3);
    assert_eq!(snapshot.items.len(), 5);
}

#[tokio::test]
async fn test_next_page_stops_at_last() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(15);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);
    list.refresh().await.unwrap();

    list.next_page().await.unwrap();
    assert_eq!(list.snapshot().page, 2);

    // Already at the end; stays put without a request.
    list.next_page().await.unwrap();
    assert_eq!(list.snapshot().page, 2);

    list.prev_page().await.unwrap();
    assert_eq!(list.snapshot().page, 1);
}

#[tokio::test]
async fn test_slow_stale_response_never_overwrites_newer_page() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(25);
    // Page 1 answers late; page 2 answers immediately.
    api.state.delay_list_page(1, Duration::from_millis(300));

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);

    let slow = {
        let list = list.clone();
        tokio::spawn(async move { list.set_page(1).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    list.set_page(2).await.unwrap();
    assert_eq!(list.snapshot().page, 2);

    // The delayed page-1 response arrives after page 2 was applied and is
    // discarded.
    slow.await.unwrap().unwrap();
    let snapshot = list.snapshot();
    assert_eq!(snapshot.page, 2);
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn test_filter_change_resets_to_first_page() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(25);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);
    list.set_page(3).await.unwrap();
    assert_eq!(list.snapshot().page, 3);

    list.set_filters(CourseFilter {
        search: Some("Course 0".to_string()),
        status: None,
    })
    .await
    .unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.page, 1);
    assert_eq!(snapshot.total, 10);
}

#[tokio::test]
async fn test_refresh_is_idempotent_without_mutations() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(12);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client, 10);
    list.refresh().await.unwrap();
    let first = list.snapshot();

    list.refresh().await.unwrap();
    let second = list.snapshot();

    assert_eq!(first.page, second.page);
    assert_eq!(first.total, second.total);
    let first_ids: Vec<_> = first.items.iter().map(|c| c.id).collect();
    let second_ids: Vec<_> = second.items.iter().map(|c| c.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_get_fetches_one_course() {
    let api = spawn_mock_api().await;
    let ids = api.state.seed_courses(3);

    let client = client_for(&api.base_url).await;
    let course: Course = client.get(CourseId::from_uuid(ids[1])).await.unwrap();
    assert_eq!(course.id, CourseId::from_uuid(ids[1]));

    let err = client.get::<Course>(CourseId::new()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_the_server() {
    let api = spawn_mock_api().await;

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client.clone(), 10);
    let guard = MutationGuard::new(client, list);

    let err = guard
        .create(&CreateCourseDto {
            title: String::new(),
            description: None,
            status: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(api.state.create_hits(), 0);
}

#[tokio::test]
async fn test_create_resyncs_the_list() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(3);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client.clone(), 10);
    list.refresh().await.unwrap();
    let guard = MutationGuard::new(client, list.clone());

    guard
        .create(&CreateCourseDto {
            title: "Byzantine Mosaics".to_string(),
            description: None,
            status: None,
        })
        .await
        .unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.total, 4);
    assert!(
        snapshot
            .items
            .iter()
            .any(|c| c.title == "Byzantine Mosaics")
    );
}

#[tokio::test]
async fn test_delete_on_a_later_page_shrinks_the_total() {
    let api = spawn_mock_api().await;
    let ids = api.state.seed_courses(15);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client.clone(), 10);
    list.set_page(2).await.unwrap();
    let guard = MutationGuard::new(client, list.clone());

    let target = CourseId::from_uuid(ids[12]);
    guard.delete(target).await.unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.total, 14);
    assert_eq!(snapshot.page, 2);
    assert!(snapshot.items.iter().all(|c| c.id != target));
}

#[tokio::test]
async fn test_failed_delete_leaves_list_intact() {
    let api = spawn_mock_api().await;
    api.state.seed_courses(5);

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client.clone(), 10);
    list.refresh().await.unwrap();
    let guard = MutationGuard::new(client, list.clone());

    let err = guard.delete(CourseId::new()).await.unwrap_err();
    assert!(err.is_not_found());

    let snapshot = list.snapshot();
    assert_eq!(snapshot.items.len(), 5);
    assert_eq!(api.state.course_count(), 5);
}

#[tokio::test]
async fn test_row_is_pending_while_delete_is_in_flight() {
    let api = spawn_mock_api().await;
    let ids = api.state.seed_courses(3);
    api.state.delay_mutations(Duration::from_millis(200));

    let client = client_for(&api.base_url).await;
    let list = ListController::<Course>::new(client.clone(), 10);
    list.refresh().await.unwrap();
    let guard = MutationGuard::new(client, list);

    let target = CourseId::from_uuid(ids[0]);
    let in_flight = {
        let guard = guard.clone();
        tokio::spawn(async move { guard.delete(target).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(guard.is_pending(target));

    // A second submission for the same row is refused while the first is
    // still in flight.
    let err = guard.delete(target).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    in_flight.await.unwrap().unwrap();
    assert!(!guard.is_pending(target));
    assert_eq!(api.state.course_count(), 2);
}
