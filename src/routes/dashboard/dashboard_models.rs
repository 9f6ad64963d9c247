use serde::Deserialize;

// Query string of /tasks/my
#[derive(Deserialize)]
pub struct MyTasksQuery {
    pub user_id: i32,
}
