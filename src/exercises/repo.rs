use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::exercises::query;

/// Exercise record. `created_by` is assigned at creation from the caller's
/// token and never changes afterwards.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub is_public: bool,
    pub created_by: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields an update is allowed to touch. `None` leaves the stored value
/// unchanged; the visibility flag itself is never part of a patch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
}

impl Exercise {
    pub async fn insert(
        db: &PgPool,
        name: &str,
        description: Option<&str>,
        difficulty: Option<&str>,
        is_public: bool,
        created_by: i64,
    ) -> anyhow::Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (name, description, difficulty, is_public, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, difficulty, is_public, created_by, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(difficulty)
        .bind(is_public)
        .bind(created_by)
        .fetch_one(db)
        .await?;
        Ok(exercise)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, difficulty, is_public, created_by, created_at, updated_at
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(exercise)
    }

    pub async fn apply_patch(
        db: &PgPool,
        id: i64,
        patch: &ExercisePatch,
    ) -> anyhow::Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            UPDATE exercises
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, difficulty, is_public, created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.difficulty.as_deref())
        .fetch_one(db)
        .await?;
        Ok(exercise)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn list(
        db: &PgPool,
        caller: Option<i64>,
        filter: Option<&str>,
        sort: Option<&str>,
    ) -> anyhow::Result<Vec<Exercise>> {
        let mut builder = query::compose_list_query(caller, filter, sort);
        let rows = builder.build_query_as::<Exercise>().fetch_all(db).await?;
        Ok(rows)
    }
}
