use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_STATUS: &str = "To-Do";
pub const DEFAULT_PRIORITY: &str = "Medium";

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Task {
    pub task_id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    // Nullable: a full-row update without these fields clears them.
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct StatusCount {
    pub status: Option<String>,
    pub count: i64,
}

/// One of the soonest-due tasks, with the assignee's name if any.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Notification {
    pub task_id: i32,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
}
