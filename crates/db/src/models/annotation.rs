//! Toxicity annotation model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `toxicity_annotations` table.
///
/// The (rev_id, worker_id) pair is the composite primary key. The two
/// classification fields are nullable and stored as-is; no range or
/// consistency checks apply anywhere in the service.
///
/// JSON serialization is camelCase (`revId`, `workerId`, `toxicity`,
/// `toxicityScore`), matching the wire format annotation clients already
/// speak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ToxicityAnnotation {
    pub rev_id: i64,
    pub worker_id: i64,
    pub toxicity: Option<f64>,
    pub toxicity_score: Option<f64>,
}
