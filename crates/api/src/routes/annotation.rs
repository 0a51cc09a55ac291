//! Route definitions for the `/toxicity` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::annotation;
use crate::state::AppState;

/// Toxicity annotation routes, mounted at the application root.
///
/// ```text
/// GET    /toxicity    list all annotations
/// POST   /toxicity    insert (fails on duplicate key)
/// PUT    /toxicity    upsert (insert-if-absent, else overwrite)
/// DELETE /toxicity    delete by key (?revId, ?workerId) -> boolean
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/toxicity",
        get(annotation::list)
            .post(annotation::create)
            .put(annotation::upsert)
            .delete(annotation::delete),
    )
}
