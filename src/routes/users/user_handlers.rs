use actix_web::{web, HttpResponse};
use log::info;
use sqlx::MySqlPool;

use crate::error::ApiError;
use crate::models::user::User;

pub async fn list_users(pool: web::Data<MySqlPool>) -> Result<HttpResponse, ApiError> {
    let users = sqlx::query_as::<_, User>("SELECT user_id, name, email, created_at FROM users")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, name, email, created_at FROM users WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool.get_ref())
    .await?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            info!("User not found: {}", user_id);
            Err(ApiError::NotFound("User"))
        }
    }
}
