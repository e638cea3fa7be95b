//! PostgreSQL-backed store and database bootstrap.

use crate::error::AppError;
use crate::model::{Tutorial, TutorialInput};
use crate::sql::{self, QueryBuf};
use crate::store::TutorialStore;
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

#[derive(Clone)]
pub struct PgTutorialStore {
    pool: PgPool,
    schema: String,
}

impl PgTutorialStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgTutorialStore {
            pool,
            schema: schema.into(),
        }
    }

    /// Create the schema and tutorials table if missing.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        for ddl in sql::create_table(&self.schema) {
            tracing::debug!(sql = %ddl, "ddl");
            sqlx::query(&ddl).execute(&self.pool).await?;
        }
        tracing::info!(schema = %self.schema, table = sql::TABLE_NAME, "tutorials table ready");
        Ok(())
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<Tutorial>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = sql::bind_as(sqlx::query_as::<_, Tutorial>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Tutorial>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = sql::bind_as(sqlx::query_as::<_, Tutorial>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let result = sql::bind(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TutorialStore for PgTutorialStore {
    async fn list_all(&self) -> Result<Vec<Tutorial>, AppError> {
        self.fetch_many(&sql::select_all(&self.schema)).await
    }

    async fn list_by_title_contains(&self, fragment: &str) -> Result<Vec<Tutorial>, AppError> {
        self.fetch_many(&sql::select_by_title_contains(&self.schema, fragment)).await
    }

    async fn list_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError> {
        self.fetch_many(&sql::select_by_published(&self.schema, published)).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        self.fetch_optional(&sql::select_by_id(&self.schema, id)).await
    }

    async fn create(&self, input: TutorialInput) -> Result<Tutorial, AppError> {
        let row = self
            .fetch_optional(&sql::insert(&self.schema, &input))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(id = row.id, "tutorial created");
        Ok(row)
    }

    async fn update_by_id(&self, id: i64, input: TutorialInput) -> Result<Tutorial, AppError> {
        self.fetch_optional(&sql::update(&self.schema, id, &input))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("tutorial {}", id)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        match self.execute(&sql::delete(&self.schema, id)).await? {
            0 => Err(AppError::NotFound(format!("tutorial {}", id))),
            _ => {
                tracing::info!(id, "tutorial deleted");
                Ok(())
            }
        }
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let removed = self.execute(&sql::delete_all(&self.schema)).await?;
        tracing::info!(removed, "all tutorials deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the database named in `database_url` if it does not exist, via the `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| AppError::Db(sqlx::Error::Configuration("DATABASE_URL: no database path".into())))?;
    let (base, path_and_query) = url.split_at(path_start);
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let admin_url = match parts.next() {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
