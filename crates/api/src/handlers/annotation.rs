//! Handlers for the `/toxicity` resource.
//!
//! Each handler maps one HTTP operation onto one repository call. There is
//! no validation or translation layer in between; the store is the sole
//! authority on what a request does.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use revtox_db::models::annotation::ToxicityAnnotation;
use revtox_db::repositories::ToxicityAnnotationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Composite-key query parameters for `DELETE /toxicity`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationKey {
    pub rev_id: i64,
    pub worker_id: i64,
}

/// GET /toxicity
///
/// List every stored annotation. Order is unspecified; no pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ToxicityAnnotation>>> {
    let annotations = ToxicityAnnotationRepo::list_all(&state.pool).await?;
    Ok(Json(annotations))
}

/// POST /toxicity
///
/// Insert a new annotation. A duplicate (revId, workerId) pair is not
/// pre-checked; the unique violation propagates as a server fault.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ToxicityAnnotation>,
) -> AppResult<Json<ToxicityAnnotation>> {
    let annotation = ToxicityAnnotationRepo::insert(&state.pool, &input).await?;

    tracing::info!(
        rev_id = annotation.rev_id,
        worker_id = annotation.worker_id,
        "Annotation created"
    );

    Ok(Json(annotation))
}

/// PUT /toxicity
///
/// Insert the annotation if its key is absent, otherwise overwrite the
/// stored non-key fields with the supplied values.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<ToxicityAnnotation>,
) -> AppResult<Json<ToxicityAnnotation>> {
    let annotation = ToxicityAnnotationRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        rev_id = annotation.rev_id,
        worker_id = annotation.worker_id,
        "Annotation upserted"
    );

    Ok(Json(annotation))
}

/// DELETE /toxicity?revId=..&workerId=..
///
/// Returns `true` if a row was deleted, `false` if the key was absent.
/// An absent key is not an error and there is no dedicated 404 here.
pub async fn delete(
    State(state): State<AppState>,
    Query(key): Query<AnnotationKey>,
) -> AppResult<Json<bool>> {
    let deleted =
        ToxicityAnnotationRepo::delete_by_key(&state.pool, key.rev_id, key.worker_id).await?;

    if deleted {
        tracing::info!(
            rev_id = key.rev_id,
            worker_id = key.worker_id,
            "Annotation deleted"
        );
    }

    Ok(Json(deleted))
}
