use actix_web::{web, HttpResponse, Responder};

use crate::error::ApiError;

use super::auth::auth_handlers;
use super::comments::comment_handlers;
use super::dashboard::dashboard_handlers;
use super::members::member_handlers;
use super::projects::project_handlers;
use super::tasks::task_handlers;
use super::users::user_handlers;

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Hello, this is the ProjectPulse API.")
}

/// Registers every endpoint along with extractor configs that report
/// rejections as `{"error": "..."}`.
pub fn api_configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .service(
        web::scope("/api")
            .configure(auth_configure)
            .configure(user_configure)
            // Before the task routes so "/tasks/my" is not taken for a task id.
            .configure(dashboard_configure)
            .configure(project_configure)
            .configure(member_configure)
            .configure(task_configure)
            .configure(comment_configure),
    );
}

pub fn auth_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(auth_handlers::register))
        .route("/login", web::post().to(auth_handlers::login));
}

pub fn user_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(user_handlers::list_users))
        .route("/users/{user_id}", web::get().to(user_handlers::get_user));
}

pub fn project_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::post().to(project_handlers::create_project))
            .route(web::get().to(project_handlers::list_projects)),
    )
    .service(
        web::resource("/projects/{project_id}")
            .route(web::get().to(project_handlers::get_project))
            .route(web::put().to(project_handlers::update_project))
            .route(web::delete().to(project_handlers::delete_project)),
    );
}

pub fn member_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/members")
            .route(web::post().to(member_handlers::add_member))
            .route(web::get().to(member_handlers::list_members)),
    )
    .route(
        "/projects/{project_id}/members/{user_id}",
        web::delete().to(member_handlers::remove_member),
    );
}

pub fn task_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/tasks")
            .route(web::post().to(task_handlers::create_task))
            .route(web::get().to(task_handlers::list_tasks)),
    )
    .service(
        web::resource("/tasks/{task_id}")
            .route(web::get().to(task_handlers::get_task))
            .route(web::put().to(task_handlers::update_task))
            .route(web::delete().to(task_handlers::delete_task)),
    );
}

pub fn comment_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/comments")
            .route(web::post().to(comment_handlers::add_comment))
            .route(web::get().to(comment_handlers::list_comments)),
    );
}

pub fn dashboard_configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/projects/{project_id}/progress",
        web::get().to(dashboard_handlers::project_progress),
    )
    .route("/tasks/my", web::get().to(dashboard_handlers::my_tasks))
    .route("/notifications", web::get().to(dashboard_handlers::notifications));
}
