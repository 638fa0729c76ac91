use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schemas::user::UserResponse;

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBlogSchema {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// PUT body. Every field overwrites the stored value, including `user`,
/// which is accepted verbatim with no ownership or existence check.
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateBlogSchema {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
    pub user: Option<i64>,
}

#[derive(Serialize, Deserialize, FromRow, Debug)]
pub struct Blog {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    #[sqlx(rename = "user_id")]
    pub user: Option<i64>,
}

/// Flat row for the list query's LEFT JOIN against `users`.
#[derive(FromRow, Debug)]
pub struct BlogOwnerRow {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    pub owner_id: Option<i64>,
    pub owner_username: Option<String>,
    pub owner_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BlogResponse {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    pub user: Option<UserResponse>,
}

pub fn to_blog_response(row: BlogOwnerRow) -> BlogResponse {
    let user = match (row.owner_id, row.owner_username, row.owner_name) {
        (Some(id), Some(username), Some(name)) => Some(UserResponse { username, name, id }),
        _ => None,
    };

    BlogResponse {
        id: row.id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user,
    }
}
