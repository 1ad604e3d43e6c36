use super::*;

#[test]
fn get_request_defaults_to_no_auth_and_no_credentials() {
    let req = ApiRequest::get("/api/items");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.body, Body::Empty);
    assert_eq!(req.authorization(), None);
    assert!(!req.include_credentials);
}

#[test]
fn bearer_formats_authorization_header() {
    let req = ApiRequest::post("/api/report_lost", Body::Multipart(Vec::new())).with_bearer("abc.def");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc.def"));
}

#[test]
fn with_credentials_sets_flag() {
    assert!(ApiRequest::get("/api/items").with_credentials().include_credentials);
}

#[test]
fn success_is_any_2xx() {
    assert!(ApiResponse::new(200, "").is_success());
    assert!(ApiResponse::new(204, "").is_success());
    assert!(!ApiResponse::new(302, "").is_success());
    assert!(!ApiResponse::new(401, "").is_success());
}

#[test]
fn plain_responses_are_not_gateway_failures() {
    assert!(!ApiResponse::new(502, r#"{"detail":"Bad gateway"}"#).gateway_failure);
}
