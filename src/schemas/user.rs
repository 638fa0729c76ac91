use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Deserialize, Serialize, FromRow, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// Partial projection used when a blog's owner is expanded on reads.
#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub id: i64,
}
