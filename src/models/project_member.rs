use serde::Serialize;
use sqlx::FromRow;

pub const DEFAULT_ROLE: &str = "Member";

/// A membership row joined with the member's user record.
#[derive(Debug, Serialize, FromRow)]
pub struct ProjectMember {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}
