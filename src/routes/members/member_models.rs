use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddMemberRequest {
    pub user_id: i32,
    pub role: Option<String>,
}
