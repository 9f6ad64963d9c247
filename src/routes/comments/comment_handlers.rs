use actix_web::{web, HttpResponse};
use log::info;
use sqlx::MySqlPool;

use super::comment_models::{AddCommentRequest, AddCommentResponse};
use crate::error::ApiError;
use crate::models::comment::Comment;

pub async fn add_comment(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
    request: web::Json<AddCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let result = sqlx::query("INSERT INTO comments (project_id, user_id, message) VALUES (?, ?, ?)")
        .bind(project_id)
        .bind(request.user_id)
        .bind(&request.message)
        .execute(pool.get_ref())
        .await?;

    let comment_id = result.last_insert_id();
    info!("User {} commented on project {}", request.user_id, project_id);

    Ok(HttpResponse::Created().json(AddCommentResponse {
        message: "Comment added".into(),
        comment_id,
    }))
}

// No ORDER BY: rows come back in whatever order the storage engine yields.
pub async fn list_comments(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let comments = sqlx::query_as::<_, Comment>(
        "
        SELECT c.comment_id, c.message, c.created_at, u.name
        FROM comments c
        JOIN users u ON c.user_id = u.user_id
        WHERE c.project_id = ?
        ",
    )
    .bind(project_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(comments))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    use crate::routes::test_support::{database_pool, init_app, lazy_pool, unique_email};

    #[actix_web::test]
    async fn test_add_comment_requires_message() {
        let app = init_app!(lazy_pool());

        let req = test::TestRequest::post()
            .uri("/api/projects/1/comments")
            .set_json(json!({ "user_id": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    #[ignore = "requires a MySQL database at DATABASE_URL"]
    async fn test_comments_carry_author_name() {
        let app = init_app!(database_pool().await);
        let email = unique_email("comment");

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "name": "Margaret", "email": email, "password": "pw" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": email, "password": "pw" }))
            .to_request();
        let login: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let user_id = login["user_id"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "name": "Apollo",
                "description": "",
                "priority": "High",
                "created_by": user_id
            }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let comments_uri = format!("/api/projects/{}/comments", created["project_id"]);

        let req = test::TestRequest::post()
            .uri(&comments_uri)
            .set_json(json!({ "user_id": user_id, "message": "Looks good" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Comment added");
        let comment_id = body["comment_id"].as_u64().unwrap();

        let req = test::TestRequest::get().uri(&comments_uri).to_request();
        let comments: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0]["comment_id"], comment_id);
        assert_eq!(comments[0]["message"], "Looks good");
        assert_eq!(comments[0]["name"], "Margaret");
        assert!(comments[0]["created_at"].is_string());
    }
}
