use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Commenter's name.
    pub name: String,
}
