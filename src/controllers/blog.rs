use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;
use sqlx::sqlite::SqlitePool;

use crate::schemas::{
    blog::{to_blog_response, Blog, BlogOwnerRow, BlogResponse, CreateBlogSchema, UpdateBlogSchema},
    claims::Claims,
    user::User,
};

fn internal_error(err: sqlx::Error) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!("store error: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error", "message": format!("{:?}", err)})),
    )
}

fn token_error() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Token Missing or invalid" })),
    )
}

pub async fn info() -> Html<&'static str> {
    Html("<h1>Blogs Info</h1>")
}

pub async fn list_blogs(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<BlogResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let rows = sqlx::query_as::<_, BlogOwnerRow>(
        r#"
        SELECT blogs.id, blogs.title, blogs.author, blogs.url, blogs.likes,
               users.id AS owner_id, users.username AS owner_username, users.name AS owner_name
        FROM blogs
        LEFT JOIN users ON users.id = blogs.user_id
        ORDER BY blogs.id
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(internal_error)?;

    let blogs = rows.into_iter().map(to_blog_response).collect();

    Ok(Json(blogs))
}

pub async fn create_blog(
    claims: Claims,
    Extension(pool): Extension<SqlitePool>,
    Json(body): Json<CreateBlogSchema>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    // The token verified, but its subject must still map to a stored user.
    let user = sqlx::query_as::<_, User>(r#"SELECT id, username, name FROM users WHERE id = ?"#)
        .bind(claims.id)
        .fetch_optional(&pool)
        .await
        .map_err(internal_error)?;

    let Some(user) = user else {
        return Err(token_error());
    };

    // Rejected only when BOTH are absent; either field alone is enough.
    if body.title.is_none() && body.url.is_none() {
        return Ok(StatusCode::BAD_REQUEST.into_response());
    }

    let likes = body.likes.unwrap_or(0);

    let result = sqlx::query(
        r#"INSERT INTO blogs (title, author, url, likes, user_id) VALUES (?, ?, ?, ?, ?)"#,
    )
    .bind(&body.title)
    .bind(&body.author)
    .bind(&body.url)
    .bind(likes)
    .bind(user.id)
    .execute(&pool)
    .await
    .map_err(internal_error)?;

    let blog_id = result.last_insert_rowid();

    // Second write, not atomic with the insert above: a failure here leaves
    // the blog unreferenced by its owner's sequence.
    sqlx::query(r#"INSERT INTO user_blogs (user_id, blog_id) VALUES (?, ?)"#)
        .bind(user.id)
        .bind(blog_id)
        .execute(&pool)
        .await
        .map_err(internal_error)?;

    let blog = sqlx::query_as::<_, Blog>(
        r#"SELECT id, title, author, url, likes, user_id FROM blogs WHERE id = ?"#,
    )
    .bind(blog_id)
    .fetch_one(&pool)
    .await
    .map_err(internal_error)?;

    Ok(Json(blog).into_response())
}

pub async fn find_blog(
    Path(id): Path<i64>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let blog = sqlx::query_as::<_, Blog>(
        r#"SELECT id, title, author, url, likes, user_id FROM blogs WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(internal_error)?;

    match blog {
        Some(blog) => Ok(Json(blog).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update_blog(
    Path(id): Path<i64>,
    Extension(pool): Extension<SqlitePool>,
    Json(body): Json<UpdateBlogSchema>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let existing = sqlx::query_as::<_, Blog>(
        r#"SELECT id, title, author, url, likes, user_id FROM blogs WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(internal_error)?;

    let Some(existing) = existing else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    sqlx::query(
        r#"UPDATE blogs SET title = ?, author = ?, url = ?, likes = ?, user_id = ? WHERE id = ?"#,
    )
    .bind(&body.title)
    .bind(&body.author)
    .bind(&body.url)
    .bind(body.likes.unwrap_or(0))
    .bind(body.user)
    .bind(id)
    .execute(&pool)
    .await
    .map_err(internal_error)?;

    // Return-old semantics: the caller sees the document as it was before
    // this update.
    Ok(Json(existing).into_response())
}

pub async fn delete_blog(
    claims: Claims,
    Path(id): Path<i64>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let user = sqlx::query_as::<_, User>(r#"SELECT id, username, name FROM users WHERE id = ?"#)
        .bind(claims.id)
        .fetch_optional(&pool)
        .await
        .map_err(internal_error)?;

    let Some(user) = user else {
        return Err(token_error());
    };

    let blog = sqlx::query_as::<_, Blog>(
        r#"SELECT id, title, author, url, likes, user_id FROM blogs WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(internal_error)?;

    // Existence before ownership, so an unknown id never hits the comparison.
    let Some(blog) = blog else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    if blog.user != Some(user.id) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "You are not authorized to delete this blog." })),
        ));
    }

    sqlx::query(r#"DELETE FROM blogs WHERE id = ?"#)
        .bind(id)
        .execute(&pool)
        .await
        .map_err(internal_error)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
