use super::*;
use crate::net::entities::{Grade, TuitionRate, TutorRequest};

#[test]
fn api_url_joins_base_and_version() {
    assert_eq!(api_url("/grades"), format!("{}/v1/grades", config::api_base_url()));
    assert_eq!(api_url("auth/me"), format!("{}/v1/auth/me", config::api_base_url()));
}

#[test]
fn list_path_includes_query() {
    assert_eq!(list_path::<Grade>(&ListQuery::page(2)), "grades?page=2&limit=10");
}

#[test]
fn item_path_uses_resource_segment() {
    assert_eq!(item_path::<TuitionRate>("r1"), "tuition-rates/r1");
    assert_eq!(item_path::<TutorRequest>("tr9"), "tutor-requests/tr9");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn status_patch_serializes_status_only() {
    let value = serde_json::to_value(StatusPatch { status: "approved" }).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "approved" }));
}

#[test]
fn assign_patch_uses_camel_case() {
    let value = serde_json::to_value(AssignTutorsPatch { assigned_tutors: vec!["t1"] }).unwrap();
    assert_eq!(value, serde_json::json!({ "assignedTutors": ["t1"] }));
}

#[test]
fn login_request_serializes_credentials() {
    let value = serde_json::to_value(LoginRequest { email: "a@b.c", password: "pw" }).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}
