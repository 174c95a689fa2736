//! Persistence interface and its PostgreSQL implementation.
//! Handlers receive the trait object, never a raw pool.

use crate::error::AppError;
use crate::model::{Hero, HeroPower, NewHeroPower, Power, PowerChanges};
use async_trait::async_trait;
use sqlx::PgPool;

/// Query surface the handlers and serializers need. Relationship traversal is
/// explicit: nested payloads are built from `hero_powers_by_hero` and
/// `powers_by_ids`, not from lazy loading.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_heroes(&self) -> Result<Vec<Hero>, AppError>;
    async fn hero(&self, id: i32) -> Result<Option<Hero>, AppError>;

    async fn list_powers(&self) -> Result<Vec<Power>, AppError>;
    async fn power(&self, id: i32) -> Result<Option<Power>, AppError>;
    /// Apply only the supplied fields in one statement. None when the power
    /// does not exist.
    async fn update_power(
        &self,
        id: i32,
        changes: &PowerChanges,
    ) -> Result<Option<Power>, AppError>;

    async fn create_hero_power(&self, new: NewHeroPower) -> Result<HeroPower, AppError>;
    /// Returns the removed row, None when the id was absent.
    async fn delete_hero_power(&self, id: i32) -> Result<Option<HeroPower>, AppError>;
    async fn hero_powers_by_hero(&self, hero_id: i32) -> Result<Vec<HeroPower>, AppError>;
    async fn powers_by_ids(&self, ids: &[i32]) -> Result<Vec<Power>, AppError>;
}

/// PostgreSQL-backed store. Every statement is parameterized; each one commits
/// on its own, which is the transaction boundary for this API.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_heroes(&self) -> Result<Vec<Hero>, AppError> {
        let sql = "SELECT id, name, super_name FROM heroes ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(&self.pool).await?)
    }

    async fn hero(&self, id: i32) -> Result<Option<Hero>, AppError> {
        let sql = "SELECT id, name, super_name FROM heroes WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_powers(&self) -> Result<Vec<Power>, AppError> {
        let sql = "SELECT id, name, description FROM powers ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(&self.pool).await?)
    }

    async fn power(&self, id: i32) -> Result<Option<Power>, AppError> {
        let sql = "SELECT id, name, description FROM powers WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn update_power(
        &self,
        id: i32,
        changes: &PowerChanges,
    ) -> Result<Option<Power>, AppError> {
        let sql = "UPDATE powers \
                   SET name = COALESCE($2, name), description = COALESCE($3, description) \
                   WHERE id = $1 \
                   RETURNING id, name, description";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.description.as_deref())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_hero_power(&self, new: NewHeroPower) -> Result<HeroPower, AppError> {
        let sql = "INSERT INTO hero_powers (strength, hero_id, power_id) \
                   VALUES ($1, $2, $3) \
                   RETURNING id, strength, hero_id, power_id";
        tracing::debug!(sql = %sql, hero_id = new.hero_id, power_id = new.power_id, "query");
        Ok(sqlx::query_as(sql)
            .bind(new.strength)
            .bind(new.hero_id)
            .bind(new.power_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete_hero_power(&self, id: i32) -> Result<Option<HeroPower>, AppError> {
        let sql = "DELETE FROM hero_powers WHERE id = $1 \
                   RETURNING id, strength, hero_id, power_id";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn hero_powers_by_hero(&self, hero_id: i32) -> Result<Vec<HeroPower>, AppError> {
        let sql = "SELECT id, strength, hero_id, power_id FROM hero_powers \
                   WHERE hero_id = $1 ORDER BY id";
        tracing::debug!(sql = %sql, hero_id, "query");
        Ok(sqlx::query_as(sql)
            .bind(hero_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn powers_by_ids(&self, ids: &[i32]) -> Result<Vec<Power>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = "SELECT id, name, description FROM powers WHERE id = ANY($1)";
        tracing::debug!(sql = %sql, ?ids, "query");
        Ok(sqlx::query_as(sql).bind(ids).fetch_all(&self.pool).await?)
    }
}
