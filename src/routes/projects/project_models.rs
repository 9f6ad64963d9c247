use serde::{Deserialize, Serialize};

// `description` and `priority` must be present but may be null.
#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub priority: Option<String>,
    pub duration: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub created_by: i32,
}

#[derive(Serialize)]
pub struct CreateProjectResponse {
    pub message: String,
    pub project_id: u64,
}

// Full overwrite of the editable columns; the creator is fixed.
#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub priority: Option<String>,
    pub duration: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
}
