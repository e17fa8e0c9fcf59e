use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use joker_api::{map_joker_error, ErrorBodyDto, JokeBodyDto, JokesBodyDto, API_VERSION};
use joker_dataset::{JokerError, ANY};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

fn joker_error_response(err: &JokerError) -> Response {
    let status = StatusCode::from_u16(map_joker_error(err).status_code)
        .unwrap_or(StatusCode::NOT_FOUND);
    (status, Json(ErrorBodyDto::from(err))).into_response()
}

fn route_not_found_response(uri: &Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBodyDto::new(format!("no route matches {}", uri.path()))),
    )
        .into_response()
}

/// The `any` wildcard is matched case-insensitively at this layer; the
/// core only recognizes the lowercase sentinel.
fn normalize_wildcard(segment: String) -> String {
    if segment.eq_ignore_ascii_case(ANY) {
        ANY.to_string()
    } else {
        segment
    }
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    with_request_id((StatusCode::OK, "ok").into_response(), &request_id)
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let resp = if state.joker.is_ready() {
        (StatusCode::OK, "ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not-ready").into_response()
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let payload = json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": API_VERSION,
        "config_schema_version": crate::config::CONFIG_SCHEMA_VERSION,
        "jokes_loaded": state.joker.joke_count(),
    });
    with_request_id(Json(payload).into_response(), &request_id)
}

pub(crate) async fn jokes_all_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((language, category)): Path<(String, String)>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    info!(
        request_id = %request_id,
        route = "/api/v1/jokes/{language}/{category}/all",
        language = %language,
        category = %category,
        "request start"
    );
    let language = normalize_wildcard(language);
    let category = normalize_wildcard(category);
    let resp = match state.joker.jokes(&language, &category, 0) {
        Ok(jokes) => Json(JokesBodyDto::from_jokes(&jokes)).into_response(),
        Err(e) => joker_error_response(&e),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn jokes_sample_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path((language, category, number)): Path<(String, String, String)>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    info!(
        request_id = %request_id,
        route = "/api/v1/jokes/{language}/{category}/{number}",
        language = %language,
        category = %category,
        number = %number,
        "request start"
    );
    // Only non-negative integers match the operation; anything else falls
    // through to the not-found envelope.
    let Ok(count) = number.parse::<u32>() else {
        return with_request_id(route_not_found_response(&uri), &request_id);
    };
    let language = normalize_wildcard(language);
    let category = normalize_wildcard(category);
    let resp = match state.joker.jokes(&language, &category, count as usize) {
        Ok(jokes) => Json(JokesBodyDto::from_jokes(&jokes)).into_response(),
        Err(e) => joker_error_response(&e),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn joke_by_id_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path(joke_id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    info!(
        request_id = %request_id,
        route = "/api/v1/jokes/id/{joke_id}",
        joke_id = %joke_id,
        "request start"
    );
    let id = match joke_id.parse::<i64>() {
        Ok(id) if id >= 0 => id,
        _ => return with_request_id(route_not_found_response(&uri), &request_id),
    };
    let resp = match state.joker.joke_by_id(id) {
        Ok(joke) => Json(JokeBodyDto::from(&joke)).into_response(),
        Err(e) => joker_error_response(&e),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn not_found_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    with_request_id(route_not_found_response(&uri), &request_id)
}
