//! Tests for the resource façade

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{body_partial_json, method as http_method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "0123456789abcdef0123456789abcdef01234567";
const KEY_B: &str = "fedcba9876543210fedcba9876543210fedcba98";
const VIDEO_ID: &str = "AbCdEfGhIjKl";

fn client(server: &MockServer) -> Client {
    let credentials = Credentials::new(server.uri(), "alice", KEY).unwrap();
    Client::new(credentials).unwrap()
}

fn list_page(objects: JsonValue) -> JsonValue {
    let count = objects.as_array().map_or(0, Vec::len);
    json!({
        "objects": objects,
        "meta": { "next": null, "total_count": count }
    })
}

// ============================================================================
// Video ID Validation
// ============================================================================

#[test_case("AbCdEfGhIjKl", true; "mixed case alphanumeric")]
#[test_case("123456789012", true; "all digits")]
#[test_case("abcdefghijkl", true; "all lowercase")]
#[test_case("", false; "empty")]
#[test_case("AbCdEfGhIjK", false; "eleven chars")]
#[test_case("AbCdEfGhIjKlM", false; "thirteen chars")]
#[test_case("AbCdEf-hIjKl", false; "contains dash")]
#[test_case("AbCdEf hIjKl", false; "contains space")]
fn test_video_id_validator(id: &str, valid: bool) {
    assert_eq!(is_valid_video_id(id), valid);
}

// ============================================================================
// Account Management
// ============================================================================

#[test]
fn test_set_account_full_replacement() {
    let credentials = Credentials::new("https://h/", "alice", KEY).unwrap();
    let mut client = Client::new(credentials).unwrap();

    let new = Credentials::new("https://other/", "bob", KEY_B).unwrap();
    client.set_account(new.clone()).unwrap();
    assert_eq!(client.credentials(), &new);
}

#[test]
fn test_set_account_partial_change_rejected() {
    let credentials = Credentials::new("https://h/", "alice", KEY).unwrap();
    let mut client = Client::new(credentials.clone()).unwrap();

    let new_key_only = Credentials::new("https://h/", "alice", KEY_B).unwrap();
    let err = client.set_account(new_key_only).unwrap_err();
    assert!(matches!(err, Error::InconsistentAccountChange { .. }));
    assert_eq!(client.credentials(), &credentials);
}

// ============================================================================
// Videos
// ============================================================================

#[tokio::test]
async fn test_get_videos_builds_filter_query() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path("/videos/"))
        .and(query_param("team", "t1"))
        .and(query_param("project", "p1"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_page(json!([{"id": VIDEO_ID}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filters = VideoFilters::default()
        .team("t1")
        .project("p1")
        .paging(Paging::default().limit(5));
    let videos = client(&server).get_videos(&filters).await.unwrap();
    assert_eq!(videos.len(), 1);
}

#[tokio::test]
async fn test_get_video_info_invalid_id_is_no_result() {
    // No server: a malformed id must short-circuit before any request
    let credentials = Credentials::new("https://unreachable.invalid/", "alice", KEY).unwrap();
    let client = Client::new(credentials).unwrap();

    let result = client.get_video_info("not-a-video").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_video_info_returns_record() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path(format!("/videos/{VIDEO_ID}/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": VIDEO_ID, "title": "T"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let info = client(&server).get_video_info(VIDEO_ID).await.unwrap();
    assert_eq!(info.unwrap()["title"], "T");
}

#[tokio::test]
async fn test_delete_video_empty_body_is_null() {
    let server = MockServer::start().await;

    Mock::given(http_method("DELETE"))
        .and(path(format!("/videos/{VIDEO_ID}/")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).delete_video(VIDEO_ID).await.unwrap();
    assert!(result.is_null());
}

#[tokio::test]
async fn test_update_video_invalid_id_fails_fast() {
    let credentials = Credentials::new("https://unreachable.invalid/", "alice", KEY).unwrap();
    let client = Client::new(credentials).unwrap();

    let err = client
        .update_video("bad id", &json!({"title": "x"}))
        .await
        .unwrap_err();
    assert!(err.is_pre_flight());
}

// ============================================================================
// Subtitles
// ============================================================================

#[test]
fn test_last_version_number_reads_first_entry() {
    let info = json!({
        "language_code": "en",
        "versions": [
            {"version_no": 7},
            {"version_no": 3},
            {"version_no": 1}
        ]
    });
    assert_eq!(last_version_number(&info), Some(7));
}

#[test]
fn test_last_version_number_empty_versions() {
    assert_eq!(last_version_number(&json!({"versions": []})), None);
    assert_eq!(last_version_number(&json!({})), None);
}

#[tokio::test]
async fn test_get_subtitle_raw_format() {
    let server = MockServer::start().await;
    let srt = "1\n00:00:00,000 --> 00:00:01,000\nHi\n";

    Mock::given(http_method("GET"))
        .and(path(format!("/videos/{VIDEO_ID}/languages/en/subtitles/")))
        .and(query_param("format", "srt"))
        .and(query_param("version_no", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(srt))
        .expect(1)
        .mount(&server)
        .await;

    let info = json!({"versions": [{"version_no": 4}]});
    let payload = client(&server)
        .get_subtitle(VIDEO_ID, "en", Some("srt"), Some(&info))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(payload.into_raw().unwrap(), srt.as_bytes());
}

#[tokio::test]
async fn test_get_subtitle_info_pins_version() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path(format!("/videos/{VIDEO_ID}/languages/en/subtitles/")))
        .and(query_param("format", "json"))
        .and(query_param("version_no", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"version_number": 2, "subtitles": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let info = client(&server)
        .get_subtitle_info(VIDEO_ID, "en", Some(2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(info["version_number"], 2);
}

#[tokio::test]
async fn test_upload_subtitle_uses_supplied_language_info() {
    let server = MockServer::start().await;

    // Only the PUT is mounted: a language lookup would fail the test
    Mock::given(http_method("PUT"))
        .and(path(format!("/videos/{VIDEO_ID}/languages/en/subtitles/")))
        .and(body_partial_json(json!({
            "sub_format": "srt",
            "version_no": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version_number": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let info = json!({"versions": [{"version_no": 2}, {"version_no": 1}]});
    let result = client(&server)
        .upload_subtitle(VIDEO_ID, "en", "1\n...", None, None, None, Some(&info))
        .await
        .unwrap();

    assert_eq!(result["version_number"], 3);
}

#[tokio::test]
async fn test_upload_subtitle_looks_up_version_when_absent() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path(format!("/videos/{VIDEO_ID}/languages/en/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"language_code": "en", "versions": [{"version_no": 5}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(http_method("PUT"))
        .and(path(format!("/videos/{VIDEO_ID}/languages/en/subtitles/")))
        .and(body_partial_json(json!({"version_no": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .upload_subtitle(
            VIDEO_ID,
            "en",
            "1\n...",
            Some("srt"),
            Some("Title"),
            None,
            None,
        )
        .await
        .unwrap();
}

// ============================================================================
// Tasks
// ============================================================================

#[tokio::test]
async fn test_create_task_with_language_info_is_single_request() {
    let server = MockServer::start().await;

    Mock::given(http_method("POST"))
        .and(path("/teams/t1/tasks/"))
        .and(body_partial_json(json!({
            "type": "Approve",
            "video_id": VIDEO_ID,
            "language": "en",
            "version_no": 9
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let info = json!({"versions": [{"version_no": 9}]});
    let task = client(&server)
        .create_task("t1", VIDEO_ID, "Approve", "en", None, Some(&info))
        .await
        .unwrap();

    assert_eq!(task["id"], 42);
}

#[tokio::test]
async fn test_get_tasks_filters_on_wire() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path("/teams/t1/tasks/"))
        .and(query_param("assignee", "alice"))
        .and(query_param("type", "Translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(json!([{"id": 1}]))))
        .expect(1)
        .mount(&server)
        .await;

    let filters = TaskFilters::default().assignee("alice").task_type("Translate");
    let tasks = client(&server).get_tasks("t1", &filters).await.unwrap();
    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_delete_task_targets_task_url() {
    let server = MockServer::start().await;

    Mock::given(http_method("DELETE"))
        .and(path("/teams/t1/tasks/42/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).delete_task("t1", 42).await.unwrap();
    assert!(result.is_null());
}

// ============================================================================
// Members
// ============================================================================

#[tokio::test]
async fn test_add_member_goes_through_safe_members() {
    let server = MockServer::start().await;

    Mock::given(http_method("POST"))
        .and(path("/teams/t1/safe-members/"))
        .and(body_partial_json(json!({"username": "bob", "role": "contributor"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"username": "bob"})))
        .expect(1)
        .mount(&server)
        .await;

    let member = client(&server)
        .add_member("t1", "bob", Some("contributor"))
        .await
        .unwrap();
    assert_eq!(member["username"], "bob");
}

#[tokio::test]
async fn test_remove_member_targets_member_url() {
    let server = MockServer::start().await;

    Mock::given(http_method("DELETE"))
        .and(path("/teams/t1/members/bob/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).remove_member("t1", "bob").await.unwrap();
}

// ============================================================================
// Users & Activities
// ============================================================================

#[tokio::test]
async fn test_get_user_profile() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path("/users/alice/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"username": "alice", "full_name": "A"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server).get_user("alice").await.unwrap();
    assert_eq!(user["username"], "alice");
}

#[tokio::test]
async fn test_get_activities_renders_time_filters_as_timestamps() {
    let server = MockServer::start().await;

    Mock::given(http_method("GET"))
        .and(path("/activity/"))
        .and(query_param("team", "t1"))
        .and(query_param("after", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let after = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let filters = ActivityFilters::default().team("t1").after(after);
    let activities = client(&server).get_activities(&filters).await.unwrap();
    assert!(activities.is_empty());
}

#[tokio::test]
async fn test_list_endpoint_object_response_is_protocol_violation() {
    let server = MockServer::start().await;

    // An auth failure body has no `objects`; the list façade refuses to
    // treat it as an empty result
    Mock::given(http_method("GET"))
        .and(path("/videos/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "forbidden"})))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_videos(&VideoFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProtocolViolation { .. }));
}
