//! Repository for the `toxicity_annotations` table.

use sqlx::PgPool;

use crate::models::annotation::ToxicityAnnotation;

/// Column list for toxicity_annotations queries.
const COLUMNS: &str = "rev_id, worker_id, toxicity, toxicity_score";

/// Provides CRUD operations for toxicity annotations.
pub struct ToxicityAnnotationRepo;

impl ToxicityAnnotationRepo {
    /// List every stored annotation. No ordering is applied.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ToxicityAnnotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM toxicity_annotations");
        sqlx::query_as::<_, ToxicityAnnotation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an annotation by its composite key.
    ///
    /// An absent key is `None`, not an error.
    pub async fn find_by_key(
        pool: &PgPool,
        rev_id: i64,
        worker_id: i64,
    ) -> Result<Option<ToxicityAnnotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM toxicity_annotations
             WHERE rev_id = $1 AND worker_id = $2"
        );
        sqlx::query_as::<_, ToxicityAnnotation>(&query)
            .bind(rev_id)
            .bind(worker_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new annotation, returning the stored row.
    ///
    /// A duplicate (rev_id, worker_id) pair is not pre-checked; it surfaces
    /// as the database's unique-violation error.
    pub async fn insert(
        pool: &PgPool,
        input: &ToxicityAnnotation,
    ) -> Result<ToxicityAnnotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO toxicity_annotations
                (rev_id, worker_id, toxicity, toxicity_score)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ToxicityAnnotation>(&query)
            .bind(input.rev_id)
            .bind(input.worker_id)
            .bind(input.toxicity)
            .bind(input.toxicity_score)
            .fetch_one(pool)
            .await
    }

    /// Insert the annotation if its key is absent, otherwise overwrite the
    /// non-key fields of the existing row with the supplied values
    /// (including overwriting to NULL).
    ///
    /// This is a find-then-write sequence, not an atomic upsert: two
    /// concurrent calls for the same key can both observe absence and race
    /// on the insert, or both observe presence with the last write winning.
    pub async fn upsert(
        pool: &PgPool,
        input: &ToxicityAnnotation,
    ) -> Result<ToxicityAnnotation, sqlx::Error> {
        match Self::find_by_key(pool, input.rev_id, input.worker_id).await? {
            None => Self::insert(pool, input).await,
            Some(_) => {
                let query = format!(
                    "UPDATE toxicity_annotations
                     SET toxicity = $1, toxicity_score = $2
                     WHERE rev_id = $3 AND worker_id = $4
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, ToxicityAnnotation>(&query)
                    .bind(input.toxicity)
                    .bind(input.toxicity_score)
                    .bind(input.rev_id)
                    .bind(input.worker_id)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Delete an annotation by its composite key. Returns true if a row was
    /// deleted, false if the key was absent.
    pub async fn delete_by_key(
        pool: &PgPool,
        rev_id: i64,
        worker_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM toxicity_annotations WHERE rev_id = $1 AND worker_id = $2")
                .bind(rev_id)
                .bind(worker_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
