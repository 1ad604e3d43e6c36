use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::net::transport::fake::FakeTransport;
use crate::net::types::ItemStatus;

fn credentials() -> Credentials {
    Credentials { email: "a@uni.edu".to_owned(), password: "pw".to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_posts_json_and_returns_token() {
    let transport = FakeTransport::new().reply(200, r#"{"access_token":"tok-1","message":"Login successful"}"#);
    let token = block_on(login(&transport, &credentials())).unwrap();
    assert_eq!(token, "tok-1");

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/api/login");
    assert_eq!(sent[0].body, Body::Json(serde_json::json!({ "email": "a@uni.edu", "password": "pw" })));
    assert_eq!(sent[0].bearer, None);
}

#[test]
fn login_rejection_surfaces_detail_as_auth_error() {
    let transport = FakeTransport::new().reply(401, r#"{"detail":"Invalid credentials"}"#);
    let err = block_on(login(&transport, &credentials())).unwrap_err();
    assert_eq!(err, PortalError::Auth("Invalid credentials".to_owned()));
}

#[test]
fn login_rejection_without_detail_uses_fallback() {
    let transport = FakeTransport::new().reply(500, "");
    let err = block_on(login(&transport, &credentials())).unwrap_err();
    assert_eq!(err, PortalError::Auth(LOGIN_FAILED.to_owned()));
}

#[test]
fn login_transport_failure_is_network_error() {
    let transport = FakeTransport::new().fail();
    assert_eq!(block_on(login(&transport, &credentials())), Err(PortalError::Network));
}

#[test]
fn host_gateway_reply_is_network_error() {
    let transport = FakeTransport::new().gateway_failure();
    assert_eq!(block_on(login(&transport, &credentials())), Err(PortalError::Network));
}

#[test]
fn backend_502_without_gateway_marker_is_server_error() {
    let transport = FakeTransport::new().reply(502, r#"{"detail":"backend unavailable"}"#);
    assert_eq!(block_on(fetch_items(&transport)), Err(PortalError::Server("backend unavailable".to_owned())));
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_posts_name_to_login_endpoint() {
    let transport = FakeTransport::new().reply(200, r#"{"access_token":"t"}"#);
    let req = SignupRequest { name: "Ana".to_owned(), email: "a@uni.edu".to_owned(), password: "pw".to_owned() };
    block_on(signup(&transport, &req)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].path, LOGIN_PATH);
    assert_eq!(
        sent[0].body,
        Body::Json(serde_json::json!({ "name": "Ana", "email": "a@uni.edu", "password": "pw" }))
    );
}

#[test]
fn signup_failure_is_server_error() {
    let transport = FakeTransport::new().reply(400, r#"{"detail":"Incorrect password"}"#);
    let req = SignupRequest::default();
    assert_eq!(
        block_on(signup(&transport, &req)),
        Err(PortalError::Server("Incorrect password".to_owned()))
    );
}

// =============================================================
// items
// =============================================================

#[test]
fn fetch_items_includes_credentials_and_decodes_list() {
    let transport = FakeTransport::new().reply(
        200,
        r#"[{"id":"1","name":"Wallet","description":"black leather","status":"Lost"},
            {"id":"2","name":"Keys","description":"","status":"Found"}]"#,
    );
    let items = block_on(fetch_items(&transport)).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].status, ItemStatus::Found);

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/api/items");
    assert!(sent[0].include_credentials);
}

#[test]
fn fetch_items_malformed_body_is_server_error() {
    let transport = FakeTransport::new().reply(200, "<html>");
    assert!(matches!(block_on(fetch_items(&transport)), Err(PortalError::Server(_))));
}

// =============================================================
// claim
// =============================================================

#[test]
fn submit_claim_failure_uses_detail_or_fallback() {
    let claim = ClaimRequest {
        item_id: "1".to_owned(),
        name: "n".to_owned(),
        email: "e".to_owned(),
        phone: "p".to_owned(),
        proof: "x".to_owned(),
    };
    let transport = FakeTransport::new()
        .reply(404, r#"{"detail":"Item not found"}"#)
        .reply(500, "{}");
    assert_eq!(
        block_on(submit_claim(&transport, &claim)),
        Err(PortalError::Server("Item not found".to_owned()))
    );
    assert_eq!(
        block_on(submit_claim(&transport, &claim)),
        Err(PortalError::Server(CLAIM_FAILED.to_owned()))
    );
}

// =============================================================
// reports
// =============================================================

#[test]
fn submit_report_sends_bearer_and_parts_in_order() {
    let transport = FakeTransport::new().reply(200, r#"{"message":"ok"}"#);
    let parts = vec![
        ("item_name".to_owned(), Part::Text("Umbrella".to_owned())),
        ("location".to_owned(), Part::Text("Gym".to_owned())),
    ];
    block_on(submit_report(&transport, REPORT_FOUND_PATH, "tok", parts.clone())).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].path, "/api/report_found");
    assert_eq!(sent[0].authorization().as_deref(), Some("Bearer tok"));
    assert_eq!(sent[0].body, Body::Multipart(parts));
}

#[test]
fn submit_report_field_errors_are_joined() {
    let transport = FakeTransport::new().reply(
        422,
        r#"{"detail":[{"loc":["body","location"],"msg":"field required"}]}"#,
    );
    assert_eq!(
        block_on(submit_report(&transport, REPORT_LOST_PATH, "tok", Vec::new())),
        Err(PortalError::Server("body.location: field required".to_owned()))
    );
}
