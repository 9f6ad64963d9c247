use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Public projection of a user row. `password_hash` is never selected into it.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub user_id: i32,
    pub password_hash: String,
}
