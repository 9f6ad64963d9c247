use actix_web::{web, HttpResponse};
use log::info;
use sqlx::MySqlPool;

use super::member_models::AddMemberRequest;
use crate::error::ApiError;
use crate::models::project_member::{ProjectMember, DEFAULT_ROLE};
use crate::routes::MessageResponse;

// Repeated adds create repeated membership rows.
pub async fn add_member(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    request: web::Json<AddMemberRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let role = request.role.as_deref().unwrap_or(DEFAULT_ROLE);

    sqlx::query("INSERT INTO project_members (project_id, user_id, role) VALUES (?, ?, ?)")
        .bind(project_id)
        .bind(request.user_id)
        .bind(role)
        .execute(pool.get_ref())
        .await?;

    info!("Added user {} to project {} as {}", request.user_id, project_id, role);
    Ok(HttpResponse::Created().json(MessageResponse::new("Member added")))
}

pub async fn list_members(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let members = sqlx::query_as::<_, ProjectMember>(
        "
        SELECT pm.id, u.name, u.email, pm.role
        FROM project_members pm
        JOIN users u ON pm.user_id = u.user_id
        WHERE pm.project_id = ?
        ",
    )
    .bind(project_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(members))
}

pub async fn remove_member(
    pool: web::Data<MySqlPool>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (project_id, user_id) = path.into_inner();

    let result = sqlx::query("DELETE FROM project_members WHERE project_id = ? AND user_id = ?")
        .bind(project_id)
        .bind(user_id)
        .execute(pool.get_ref())
        .await?;

    info!(
        "Removed user {} from project {} ({} rows)",
        user_id,
        project_id,
        result.rows_affected()
    );
    Ok(HttpResponse::Ok().json(MessageResponse::new("Member removed")))
}
