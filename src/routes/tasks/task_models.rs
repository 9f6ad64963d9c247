use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
pub struct CreateTaskResponse {
    pub message: String,
    pub task_id: u64,
}

// `description` must be present but may be null. Optional fields left out
// of an update are stored as NULL, not defaulted.
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}
