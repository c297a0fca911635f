/**
 * Event Handlers
 *
 * - POST /api/events - submit an event (requires session)
 * - GET /api/events - list all events, date ascending
 * - GET /api/events/{id} - one event with its organizer
 * - GET /api/events/mine - the caller's events (requires session)
 *
 * Submission resolves the session before validating or touching the
 * store, so an unauthenticated request is rejected with "must be logged
 * in" rather than a validation message.
 */

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use uuid::Uuid;

use crate::auth::resolver::require_session;
use crate::error::AppError;
use crate::events::db::{
    create_event, find_event_by_id, list_events, list_events_by_user, NewEvent,
};
use crate::events::types::{EventDetailResponse, EventResponse, SubmitEventRequest};
use crate::server::state::AppState;

/// Submit a new event
///
/// # Errors
///
/// * `400 Bad Request` - missing required fields, unknown type, bad date
/// * `401 Unauthorized` - no valid session
/// * `500 Internal Server Error` - persistence failure
pub async fn submit_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let session = require_session(&state, &headers).await?;

    let (kind, date) = request.validate()?;

    let event = create_event(
        &state.db,
        &NewEvent {
            name: request.name,
            date,
            event_type: kind.as_str().to_string(),
            location: request.location,
            college: request.college,
            link: request.link,
            description: request.description,
            contact: request.contact,
            image_url: request.image_url,
            user_id: session.id,
        },
    )
    .await?;

    tracing::info!("Event submitted: {} by {}", event.id, session.id);

    Ok(Json(event.into()))
}

/// List all events, ordered by ascending date
pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = list_events(&state.db).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// One event with its organizer's name
///
/// # Errors
///
/// * `404 Not Found` - no event with this id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDetailResponse>, AppError> {
    let event = find_event_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Event"))?;

    Ok(Json(event.into()))
}

/// Events submitted by the authenticated user, date ascending
pub async fn get_my_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let session = require_session(&state, &headers).await?;

    let events = list_events_by_user(&state.db, session.id).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}
