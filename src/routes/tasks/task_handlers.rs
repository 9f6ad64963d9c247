use actix_web::{web, HttpResponse};
use log::info;
use sqlx::MySqlPool;

use super::task_models::{CreateTaskRequest, CreateTaskResponse, UpdateTaskRequest};
use crate::error::ApiError;
use crate::models::task::{Task, DEFAULT_PRIORITY, DEFAULT_STATUS};
use crate::routes::MessageResponse;

pub(crate) const TASK_COLUMNS: &str =
    "task_id, project_id, title, description, assignee_id, status, priority, due_date, image_url";

pub async fn create_task(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    info!("Received request to add task '{}' to project {}", request.title, project_id);

    let result = sqlx::query(
        "
        INSERT INTO tasks (project_id, title, description, assignee_id, status, priority, due_date, image_url)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(project_id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.assignee_id)
    .bind(request.status.as_deref().unwrap_or(DEFAULT_STATUS))
    .bind(request.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
    .bind(request.due_date)
    .bind(&request.image_url)
    .execute(pool.get_ref())
    .await?;

    let task_id = result.last_insert_id();
    info!("Task {} added to project {}", task_id, project_id);

    Ok(HttpResponse::Created().json(CreateTaskResponse {
        message: "Task created".into(),
        task_id,
    }))
}

pub async fn list_tasks(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let tasks = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE project_id = ?",
        TASK_COLUMNS
    ))
    .bind(project_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn get_task(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();

    let task = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE task_id = ?",
        TASK_COLUMNS
    ))
    .bind(task_id)
    .fetch_optional(pool.get_ref())
    .await?;

    match task {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => {
            info!("Task not found: {}", task_id);
            Err(ApiError::NotFound("Task"))
        }
    }
}

pub async fn update_task(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();

    let result = sqlx::query(
        "
        UPDATE tasks
        SET title = ?, description = ?, assignee_id = ?, status = ?, priority = ?, due_date = ?, image_url = ?
        WHERE task_id = ?
        ",
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.assignee_id)
    .bind(&request.status)
    .bind(&request.priority)
    .bind(request.due_date)
    .bind(&request.image_url)
    .bind(task_id)
    .execute(pool.get_ref())
    .await?;

    info!("Updated task {} ({} rows)", task_id, result.rows_affected());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Task updated")))
}

pub async fn delete_task(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();

    let result = sqlx::query("DELETE FROM tasks WHERE task_id = ?")
        .bind(task_id)
        .execute(pool.get_ref())
        .await?;

    info!("Deleted task {} ({} rows)", task_id, result.rows_affected());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Task deleted")))
}
