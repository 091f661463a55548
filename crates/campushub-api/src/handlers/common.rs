//! Handlers available to every authenticated role.

use axum::extract::{Query, State};
use axum::Json;

use campushub_core::error::AppError;
use campushub_entity::location::Location;

use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /common/locations
pub async fn list_active_locations(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<Location>>, AppError> {
    let locations = state
        .location_service
        .list_active_locations(&params.into_page())
        .await?;

    Ok(Json(locations))
}
