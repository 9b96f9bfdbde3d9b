use super::*;

#[test]
fn http_error_renders_status_and_body() {
    let err = FetchError::Http { status: 500, body: "boom".to_owned() };
    assert_eq!(err.to_string(), "HTTP 500: boom");
}

#[test]
fn network_error_renders_cause() {
    let err = FetchError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn api_body_splits_into_json_or_text() {
    let json = ApiBody::Json(serde_json::json!({"a": 1}));
    assert_eq!(json.clone().into_json(), Some(serde_json::json!({"a": 1})));
    assert_eq!(json.into_text(), None);

    let text = ApiBody::Text("hello".to_owned());
    assert_eq!(text.clone().into_text(), Some("hello".to_owned()));
    assert_eq!(text.into_json(), None);
}

#[test]
fn token_cell_clones_share_one_slot() {
    let cell = TokenCell::new();
    let observer = cell.clone();
    assert_eq!(observer.get(), None);

    cell.set("tok".to_owned());
    assert_eq!(observer.get(), Some("tok".to_owned()));

    cell.clear();
    assert_eq!(observer.get(), None);
}

#[test]
fn request_options_default_to_plain_get() {
    let options = RequestOptions::default();
    assert_eq!(options.method, Method::Get);
    assert!(options.headers.is_empty());
    assert!(options.body.is_none());
    assert_eq!(options.credentials, None);
}

#[test]
fn post_json_carries_payload() {
    let options = RequestOptions::post_json(serde_json::json!({"name": "gauch"}));
    assert_eq!(options.method, Method::Post);
    assert!(matches!(options.body, Some(RequestBody::Json(_))));
}

#[test]
fn json_and_text_bodies_are_not_form_data() {
    assert!(!RequestBody::Json(serde_json::Value::Null).is_form());
    assert!(!RequestBody::Text(String::new()).is_form());
}
