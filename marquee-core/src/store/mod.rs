use async_trait::async_trait;

use crate::error::Result;
use crate::filters::Filters;
use crate::movie::Movie;

pub mod postgres;

/// Persistence port for the movie catalog.
///
/// One logical read or write per call, answered synchronously. All
/// absent-row conditions surface as [`StoreError::RecordNotFound`]
/// rather than an empty result.
///
/// [`StoreError::RecordNotFound`]: crate::error::StoreError::RecordNotFound
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie; the store assigns `id` and the initial
    /// `version` and writes them back into `movie`.
    async fn insert(&self, movie: &mut Movie) -> Result<()>;

    async fn get(&self, id: i64) -> Result<Movie>;

    /// Persist changed fields of an existing movie. The row is matched on
    /// id and current version, so a concurrent update or delete surfaces
    /// as `RecordNotFound`; on success the bumped version is written back.
    async fn update(&self, movie: &mut Movie) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// List movies matching `title` (case-insensitive full-text, empty =
    /// no filter) and `genres` (must contain all, empty = no filter),
    /// ordered and paginated per `filters`.
    ///
    /// `filters.sort` must already have passed safelist validation.
    async fn get_all(
        &self,
        title: &str,
        genres: &[String],
        filters: &Filters,
    ) -> Result<Vec<Movie>>;
}
