use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use super::dashboard_models::MyTasksQuery;
use crate::error::ApiError;
use crate::models::task::{Notification, StatusCount, Task};
use crate::routes::tasks::task_handlers::TASK_COLUMNS;

const NOTIFICATION_LIMIT: i64 = 10;

// Task counts per status for one project
pub async fn project_progress(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let stats = sqlx::query_as::<_, StatusCount>(
        "SELECT status, COUNT(*) AS count FROM tasks WHERE project_id = ? GROUP BY status",
    )
    .bind(project_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(stats))
}

pub async fn my_tasks(
    pool: web::Data<MySqlPool>,
    query: web::Query<MyTasksQuery>,
) -> Result<HttpResponse, ApiError> {
    let tasks = sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE assignee_id = ?",
        TASK_COLUMNS
    ))
    .bind(query.user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// The soonest-due tasks across every project. Not scoped to a caller; where
/// NULL due dates sort is up to MySQL (first, for ascending order).
pub async fn notifications(pool: web::Data<MySqlPool>) -> Result<HttpResponse, ApiError> {
    let notifications = sqlx::query_as::<_, Notification>(
        "
        SELECT t.task_id, t.title, t.due_date, u.name AS assignee
        FROM tasks t
        LEFT JOIN users u ON t.assignee_id = u.user_id
        ORDER BY t.due_date ASC
        LIMIT ?
        ",
    )
    .bind(NOTIFICATION_LIMIT)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(notifications))
}
