use super::*;

// =============================================================
// RequestContext
// =============================================================

#[test]
fn get_context_has_no_body_or_headers() {
    let ctx = RequestContext::get("http://localhost:9090/user/check-token");
    assert_eq!(ctx.method, Method::Get);
    assert_eq!(ctx.body, None);
    assert!(ctx.headers.is_empty());
}

#[test]
fn post_context_carries_its_payload() {
    let body = serde_json::json!({ "email": "a@b.c" });
    let ctx = RequestContext::post("http://localhost:9090/user/login", body.clone());
    assert_eq!(ctx.method, Method::Post);
    assert_eq!(ctx.body, Some(body));
}

#[test]
fn header_lookup_is_case_insensitive() {
    let mut ctx = RequestContext::get("/x");
    ctx.headers.push(("Authorization".to_owned(), "Bearer t".to_owned()));
    assert_eq!(ctx.header("authorization"), Some("Bearer t"));
    assert_eq!(ctx.header("X-Missing"), None);
}

#[test]
fn method_renders_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn decode_envelope_accepts_code_200_with_data() {
    let body = serde_json::json!({
        "code": 200,
        "message": "ok",
        "data": { "token": "abc" }
    });
    let envelope = decode_envelope("/user/login", body).expect("decode");
    assert_eq!(envelope.data, Some(serde_json::json!({ "token": "abc" })));
}

#[test]
fn decode_envelope_accepts_code_200_without_data() {
    let body = serde_json::json!({ "code": 200, "message": "registered" });
    let envelope = decode_envelope("/user/register", body).expect("decode");
    assert_eq!(envelope.data, None);
}

#[test]
fn decode_envelope_rejects_non_200_codes() {
    let body = serde_json::json!({ "code": 403, "message": "account disabled" });
    let failure = decode_envelope("/user/login", body).expect_err("reject");
    assert_eq!(
        failure,
        ApiFailure::Rejected {
            url: "/user/login".to_owned(),
            status: 403,
            message: "account disabled".to_owned(),
        }
    );
}

#[test]
fn decode_envelope_rejects_non_envelope_bodies() {
    let failure = decode_envelope("/user/login", serde_json::json!("plain text"))
        .expect_err("reject");
    assert!(matches!(failure, ApiFailure::Transport { .. }));
}
