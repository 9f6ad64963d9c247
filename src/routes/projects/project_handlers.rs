use actix_web::{web, HttpResponse};
use log::info;
use sqlx::MySqlPool;

use super::project_models::{CreateProjectRequest, CreateProjectResponse, UpdateProjectRequest};
use crate::error::ApiError;
use crate::models::project::Project;
use crate::routes::MessageResponse;

const PROJECT_COLUMNS: &str =
    "project_id, name, description, priority, duration, tags, image_url, created_by";

// created_by is stored as given; it is not checked against users.
pub async fn create_project(
    pool: web::Data<MySqlPool>,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Received request to create project: {}", request.name);

    let result = sqlx::query(
        "
        INSERT INTO projects (name, description, priority, duration, tags, image_url, created_by)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.priority)
    .bind(&request.duration)
    .bind(&request.tags)
    .bind(&request.image_url)
    .bind(request.created_by)
    .execute(pool.get_ref())
    .await?;

    let project_id = result.last_insert_id();
    info!("Project {} created by user {}", project_id, request.created_by);

    Ok(HttpResponse::Created().json(CreateProjectResponse {
        message: "Project created".into(),
        project_id,
    }))
}

pub async fn list_projects(pool: web::Data<MySqlPool>) -> Result<HttpResponse, ApiError> {
    let projects = sqlx::query_as::<_, Project>(&format!("SELECT {} FROM projects", PROJECT_COLUMNS))
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

pub async fn get_project(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let project = sqlx::query_as::<_, Project>(&format!(
        "SELECT {} FROM projects WHERE project_id = ?",
        PROJECT_COLUMNS
    ))
    .bind(project_id)
    .fetch_optional(pool.get_ref())
    .await?;

    match project {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => {
            info!("Project not found: {}", project_id);
            Err(ApiError::NotFound("Project"))
        }
    }
}

pub async fn update_project(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    request: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let result = sqlx::query(
        "
        UPDATE projects
        SET name = ?, description = ?, priority = ?, duration = ?, tags = ?, image_url = ?
        WHERE project_id = ?
        ",
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.priority)
    .bind(&request.duration)
    .bind(&request.tags)
    .bind(&request.image_url)
    .bind(project_id)
    .execute(pool.get_ref())
    .await?;

    info!("Updated project {} ({} rows)", project_id, result.rows_affected());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project updated")))
}

// Members, tasks and comments of the project are left in place.
pub async fn delete_project(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let result = sqlx::query("DELETE FROM projects WHERE project_id = ?")
        .bind(project_id)
        .execute(pool.get_ref())
        .await?;

    info!("Deleted project {} ({} rows)", project_id, result.rows_affected());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted")))
}
