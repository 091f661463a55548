//! Location management.

use std::sync::Arc;

use tracing::info;

use campushub_core::error::AppError;
use campushub_core::types::pagination::Page;
use campushub_database::repositories::location::LocationRepository;
use campushub_entity::location::model::CreateLocation;
use campushub_entity::location::Location;

/// Handles location creation and queries.
#[derive(Debug, Clone)]
pub struct LocationService {
    /// Location repository.
    location_repo: Arc<LocationRepository>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(location_repo: Arc<LocationRepository>) -> Self {
        Self { location_repo }
    }

    /// Lists all locations with pagination.
    pub async fn list_locations(&self, page: &Page) -> Result<Vec<Location>, AppError> {
        self.location_repo.list(page).await
    }

    /// Lists active locations with pagination.
    pub async fn list_active_locations(&self, page: &Page) -> Result<Vec<Location>, AppError> {
        self.location_repo.list_active(page).await
    }

    /// Creates a new location; duplicate names are rejected before any write.
    pub async fn create_location(&self, req: CreateLocation) -> Result<Location, AppError> {
        if self.location_repo.find_by_name(&req.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Location '{}' already exists",
                req.name
            )));
        }

        let location = self.location_repo.create(&req).await?;

        info!(location_id = location.id, name = %location.name, "Location created");

        Ok(location)
    }
}
