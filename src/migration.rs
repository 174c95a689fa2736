//! Database bootstrap: create the database if missing, then the three tables.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Idempotent DDL for heroes, powers, and hero_powers. Join rows are removed
/// with their endpoints (ON DELETE CASCADE), so they never outlive a hero or
/// power deleted outside this API.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    const TABLES: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            super_name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS powers (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS hero_powers (
            id SERIAL PRIMARY KEY,
            strength TEXT NOT NULL,
            hero_id INTEGER NOT NULL REFERENCES heroes(id) ON DELETE CASCADE,
            power_id INTEGER NOT NULL REFERENCES powers(id) ON DELETE CASCADE
        )
        "#,
    ];
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Validation(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Validation("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
