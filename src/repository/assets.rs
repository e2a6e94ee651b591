//! Asset repository
//!
//! Maps `Asset` to and from rows of the `assets` table. Column names live in
//! one place (`columns`) and the write bind order in one function
//! (`bind_fields`).

use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{FromRow, Row};

use super::errors::{RepositoryError, RepositoryResult};
use crate::asset::{Asset, AssetFilter, NewAsset};

mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const SERIAL_NUMBER: &str = "serial_number";
    pub const CATEGORY: &str = "category";
    pub const STATUS: &str = "status";
    pub const ACQUISITION_DATE: &str = "acquisition_date";
}

const LIST_SQL: &str = "SELECT id, name, serial_number, category, status, acquisition_date \
     FROM assets ORDER BY id";

const LIST_BY_STATUS_SQL: &str = "SELECT id, name, serial_number, category, status, acquisition_date \
     FROM assets WHERE status = ? ORDER BY id";

const GET_SQL: &str = "SELECT id, name, serial_number, category, status, acquisition_date \
     FROM assets WHERE id = ?";

const INSERT_SQL: &str = "INSERT INTO assets (name, serial_number, category, status, acquisition_date) \
     VALUES (?, ?, ?, ?, ?) \
     RETURNING id, name, serial_number, category, status, acquisition_date";

const UPDATE_SQL: &str = "UPDATE assets SET \
         name = ?, serial_number = ?, category = ?, status = ?, acquisition_date = ? \
     WHERE id = ? \
     RETURNING id, name, serial_number, category, status, acquisition_date";

const DELETE_SQL: &str = "DELETE FROM assets WHERE id = ?";

impl<'r> FromRow<'r, SqliteRow> for Asset {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Asset {
            id: row.try_get(columns::ID)?,
            name: row.try_get(columns::NAME)?,
            serial_number: row.try_get(columns::SERIAL_NUMBER)?,
            category: row.try_get(columns::CATEGORY)?,
            status: row.try_get(columns::STATUS)?,
            acquisition_date: row.try_get(columns::ACQUISITION_DATE)?,
        })
    }
}

type AssetQuery<'q> = QueryAs<'q, Sqlite, Asset, SqliteArguments<'q>>;

/// Bind the writable fields in table order (name .. acquisition_date)
fn bind_fields<'q>(query: AssetQuery<'q>, asset: &'q NewAsset) -> AssetQuery<'q> {
    query
        .bind(asset.name.as_str())
        .bind(asset.serial_number.as_str())
        .bind(asset.category.as_deref())
        .bind(asset.status.as_deref())
        .bind(asset.acquisition_date)
}

/// Asset persistence over a SQLite pool
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: SqlitePool,
}

impl AssetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All assets in id order, optionally narrowed by exact status
    pub async fn list(&self, filter: &AssetFilter) -> RepositoryResult<Vec<Asset>> {
        let assets = match filter.status.as_deref() {
            Some(status) => {
                sqlx::query_as::<_, Asset>(LIST_BY_STATUS_SQL)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, Asset>(LIST_SQL)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(assets)
    }

    /// Fetch one asset
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` when no row has this id.
    pub async fn get(&self, id: i64) -> RepositoryResult<Asset> {
        sqlx::query_as::<_, Asset>(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Insert a new row; the store assigns the id
    pub async fn create(&self, asset: &NewAsset) -> RepositoryResult<Asset> {
        let created = bind_fields(sqlx::query_as(INSERT_SQL), asset)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id = created.id, "asset created");
        Ok(created)
    }

    /// Replace every writable field of the row keyed by `id`
    ///
    /// Never inserts; ids are only assigned by `create`.
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` when no row has this id.
    pub async fn save(&self, id: i64, asset: &NewAsset) -> RepositoryResult<Asset> {
        let saved = bind_fields(sqlx::query_as(UPDATE_SQL), asset)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))?;
        tracing::debug!(id, "asset saved");
        Ok(saved)
    }

    /// Remove the row keyed by `id`
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` when nothing was deleted.
    pub async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        tracing::debug!(id, "asset deleted");
        Ok(())
    }

    /// Round-trip to the store
    pub async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
