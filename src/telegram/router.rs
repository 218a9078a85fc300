//! Telegram subrouter definition.
//!
//! The following subroute is supported:
//!
//! - POST: `/`

use super::{
    auth::{is_valid_secret, SECRET_HEADER},
    update::Update,
};
use crate::router::Deps;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::HeaderMap, StatusCode},
    routing::post,
    Router,
};
use axum_extra::{headers, TypedHeader};
use tracing::{info, warn};

/// Instantiate a new Telegram subrouter.
pub fn telegram_router() -> Router<Deps> {
    Router::new().route("/", post(update_handler))
}

/// Handler for the POST subroute `/`.
///
/// A `X-Telegram-Bot-Api-Secret-Token` header matching the secret we
/// registered the webhook with must be present. If we're polling instead
/// there's no secret and every request is refused.
///
/// Accepts an [Update] in `application/json` format, which is handled before
/// responding. Telegram doesn't send the next update for a chat until we've
/// responded, which keeps each user's events in order.
async fn update_handler(
    State(deps): State<Deps>,
    TypedHeader(content_type): TypedHeader<headers::ContentType>,
    headers: HeaderMap,
    // We can't parse this until we know the request came from Telegram.
    body_bytes: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    let secret = deps.webhook_secret.as_ref().ok_or_else(|| {
        warn!("Received a webhook request while polling for updates");

        (StatusCode::PRECONDITION_FAILED, String::new())
    })?;

    let offered = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
    if !is_valid_secret(secret, offered) {
        warn!(
            "{} webhook secret",
            if offered.is_some() { "Invalid" } else { "Missing" }
        );

        return Err((StatusCode::UNAUTHORIZED, String::new()));
    }

    if !content_type.to_string().starts_with("application/json") {
        warn!("Unsupported update content type: {}", content_type);

        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            String::from("Requests must have `Content-Type: application/json`"),
        ));
    }

    let update = serde_json::from_slice::<Update>(&body_bytes).map_err(|e| {
        let msg = format!("Failed to deserialize update: {}", e);
        warn!("{}", msg);

        (StatusCode::UNPROCESSABLE_ENTITY, msg)
    })?;

    let update_id = update.update_id;
    match update.into_event() {
        Some(event) => deps.dispatcher.dispatch(event).await,
        None => info!("Ignoring unsupported update {}", update_id),
    }

    Ok(StatusCode::OK)
}
