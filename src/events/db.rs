/**
 * Event Database Operations
 *
 * Row types and the persistence operations for events. Listings are
 * always ordered by ascending event date; the detail query joins the
 * owning user for the organizer name.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Event record as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    /// Kebab-case kind string, validated at the boundary
    pub event_type: String,
    pub location: String,
    pub college: Option<String>,
    pub link: String,
    pub description: String,
    pub contact: Option<String>,
    pub image_url: Option<String>,
    /// Owning user
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new event, already validated
#[derive(Debug)]
pub struct NewEvent {
    pub name: String,
    pub date: DateTime<Utc>,
    pub event_type: String,
    pub location: String,
    pub college: Option<String>,
    pub link: String,
    pub description: String,
    pub contact: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Uuid,
}

/// Event joined with its organizer's name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventWithOrganizerRow {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    pub event_type: String,
    pub location: String,
    pub college: Option<String>,
    pub link: String,
    pub description: String,
    pub contact: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Uuid,
    pub organizer_first_name: String,
    pub organizer_last_name: String,
}

/// Create a new event
pub async fn create_event(pool: &PgPool, new: &NewEvent) -> Result<Event, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (id, name, date, event_type, location, college, link,
                            description, contact, image_url, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, name, date, event_type, location, college, link,
                  description, contact, image_url, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(&new.name)
    .bind(new.date)
    .bind(&new.event_type)
    .bind(&new.location)
    .bind(&new.college)
    .bind(&new.link)
    .bind(&new.description)
    .bind(&new.contact)
    .bind(&new.image_url)
    .bind(new.user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// All events, ordered by ascending date
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, date, event_type, location, college, link,
               description, contact, image_url, user_id, created_at
        FROM events
        ORDER BY date ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(events)
}

/// One event with its organizer's name, or `None`
pub async fn find_event_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<EventWithOrganizerRow>, sqlx::Error> {
    let event = sqlx::query_as::<_, EventWithOrganizerRow>(
        r#"
        SELECT e.id, e.name, e.date, e.event_type, e.location, e.college, e.link,
               e.description, e.contact, e.image_url, e.user_id,
               u.first_name AS organizer_first_name,
               u.last_name AS organizer_last_name
        FROM events e
        JOIN users u ON u.id = e.user_id
        WHERE e.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event)
}

/// Events owned by a user, ordered by ascending date
pub async fn list_events_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Event>, sqlx::Error> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, date, event_type, location, college, link,
               description, contact, image_url, user_id, created_at
        FROM events
        WHERE user_id = $1
        ORDER BY date ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(events)
}
