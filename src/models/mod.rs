// src/models/mod.rs

pub mod user;
pub mod project;
pub mod project_member;
pub mod task;
pub mod comment;
