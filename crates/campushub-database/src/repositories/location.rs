//! Location repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::types::pagination::Page;
use campushub_entity::location::model::CreateLocation;
use campushub_entity::location::Location;

/// Repository for location CRUD and query operations.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    /// Create a new location repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a location by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find location by id", e)
            })
    }

    /// Find a location by its unique name (case-insensitive).
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find location by name", e)
            })
    }

    /// List all locations with pagination.
    pub async fn list(&self, page: &Page) -> AppResult<Vec<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY id ASC LIMIT ? OFFSET ?")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list locations", e))
    }

    /// List active locations with pagination.
    pub async fn list_active(&self, page: &Page) -> AppResult<Vec<Location>> {
        sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE is_active = TRUE ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active locations", e)
        })
    }

    /// Create a new location.
    pub async fn create(&self, data: &CreateLocation) -> AppResult<Location> {
        let now = Utc::now();
        sqlx::query_as::<_, Location>(
            "INSERT INTO locations (name, description, building, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, TRUE, ?, ?) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.building)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.message().contains("locations.name") => {
                AppError::conflict(format!("Location '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create location", e),
        })
    }

    /// Count active locations.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count active locations", e)
            })
    }
}
