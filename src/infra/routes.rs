use axum::{
    routing::get,
    Extension, Router,
};
use sqlx::sqlite::SqlitePool;

use crate::controllers::blog::{create_blog, delete_blog, find_blog, info, list_blogs, update_blog};
use crate::infra::cors;
use crate::schemas::claims::Keys;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/blogs/info", get(info))
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route(
            "/api/blogs/:id",
            get(find_blog).put(update_blog).delete(delete_blog),
        )
}

/// Full application: the router plus the layers main and the tests share.
pub fn create_app(pool: SqlitePool, keys: Keys) -> Router {
    create_router()
        .layer(cors::create_cors())
        .layer(Extension(pool))
        .layer(Extension(keys))
}
