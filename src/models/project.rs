use serde::Serialize;

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Project {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub duration: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub created_by: i32,
}
