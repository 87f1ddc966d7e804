use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::{Result, StoreError};
use crate::filters::Filters;
use crate::movie::Movie;
use crate::runtime::Runtime;
use crate::store::MovieStore;

/// PostgreSQL-backed movie store.
#[derive(Clone, Debug)]
pub struct PostgresMovieStore {
    pool: PgPool,
}

impl PostgresMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending migrations.
    pub async fn initialize_schema(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Internal(format!("migration failed: {}", e)))?;

        tracing::info!("database schema is up to date");
        Ok(())
    }

    fn movie_from_row(row: &PgRow) -> Result<Movie> {
        Ok(Movie {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            year: row.try_get("year")?,
            runtime: Runtime::new(row.try_get("runtime")?),
            genres: row.try_get("genres")?,
            version: row.try_get("version")?,
        })
    }
}

#[async_trait]
impl MovieStore for PostgresMovieStore {
    async fn insert(&self, movie: &mut Movie) -> Result<()> {
        let row = sqlx::query(
            r#"
            INSERT INTO movies (title, year, runtime, genres)
            VALUES ($1, $2, $3, $4)
            RETURNING id, version
            "#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.runtime.minutes())
        .bind(&movie.genres)
        .fetch_one(self.pool())
        .await?;

        movie.id = row.try_get("id")?;
        movie.version = row.try_get("version")?;
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Movie> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let row = sqlx::query(
            r#"
            SELECT id, title, year, runtime, genres, version
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Err(StoreError::RecordNotFound);
        };

        Self::movie_from_row(&row)
    }

    async fn update(&self, movie: &mut Movie) -> Result<()> {
        // Matching on version as well as id turns a lost-update race into
        // RecordNotFound instead of silently clobbering the other writer.
        let row = sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, year = $2, runtime = $3, genres = $4, version = version + 1
            WHERE id = $5 AND version = $6
            RETURNING version
            "#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.runtime.minutes())
        .bind(&movie.genres)
        .bind(movie.id)
        .bind(movie.version)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Err(StoreError::RecordNotFound);
        };

        movie.version = row.try_get("version")?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }

        Ok(())
    }

    async fn get_all(
        &self,
        title: &str,
        genres: &[String],
        filters: &Filters,
    ) -> Result<Vec<Movie>> {
        // The sort column comes from the endpoint safelist, never straight
        // from user input; only LIMIT/OFFSET and the match values are bound.
        let query = format!(
            r#"
            SELECT id, title, year, runtime, genres, version
            FROM movies
            WHERE (to_tsvector('simple', title) @@ plainto_tsquery('simple', $1) OR $1 = '')
              AND (genres @> $2 OR $2 = '{{}}')
            ORDER BY {} {}, id ASC
            LIMIT $3 OFFSET $4
            "#,
            filters.sort_column(),
            filters.sort_direction().as_sql(),
        );

        let rows = sqlx::query(&query)
            .bind(title)
            .bind(genres)
            .bind(filters.limit())
            .bind(filters.offset())
            .fetch_all(self.pool())
            .await?;

        let mut movies = Vec::with_capacity(rows.len());
        for row in &rows {
            movies.push(Self::movie_from_row(row)?);
        }

        Ok(movies)
    }
}
