// src/routes.rs

use serde::Serialize;

pub mod routes;

pub mod auth {
    pub mod auth_handlers;
    pub mod auth_models;
}

pub mod users {
    pub mod user_handlers;
}

pub mod projects {
    pub mod project_handlers;
    pub mod project_models;
}

pub mod members {
    pub mod member_handlers;
    pub mod member_models;
}

pub mod tasks {
    pub mod task_handlers;
    pub mod task_models;
}

pub mod comments {
    pub mod comment_handlers;
    pub mod comment_models;
}

pub mod dashboard {
    pub mod dashboard_handlers;
    pub mod dashboard_models;
}

#[cfg(test)]
pub mod test_support;

/// Body of mutations that report nothing beyond success.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
