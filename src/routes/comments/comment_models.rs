use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddCommentRequest {
    pub user_id: i32,
    pub message: String,
}

#[derive(Serialize)]
pub struct AddCommentResponse {
    pub message: String,
    pub comment_id: u64,
}
