//! JSON REST handlers for states.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use covid19_app::ports::{DistrictRepository, StateRepository};
use covid19_domain::id::StateId;
use covid19_domain::state::{State as IndianState, StateStats};

use crate::error::{ApiError, TextError};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<IndianState>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<IndianState>),
    /// No state matched; answered with an empty `200`.
    Empty,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<StateStats>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /states/`
pub async fn list<SR, DR>(
    State(state): State<AppState<SR, DR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let states = state.state_service.list_states().await?;
    Ok(ListResponse::Ok(Json(states)))
}

/// `GET /states/{state_id}`
pub async fn get<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let Ok(state_id) = id.parse::<StateId>() else {
        return Ok(GetResponse::Empty);
    };
    let found = state.state_service.get_state(state_id).await?;
    Ok(found.map_or(GetResponse::Empty, |s| GetResponse::Ok(Json(s))))
}

/// `GET /states/{state_id}/stats/`
pub async fn stats<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
) -> Result<StatsResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    // a key that is not an integer owns no district: every sum is null
    let Ok(state_id) = id.parse::<StateId>() else {
        return Ok(StatsResponse::Ok(Json(StateStats::default())));
    };
    let stats = state.state_service.get_state_stats(state_id).await?;
    Ok(StatsResponse::Ok(Json(stats)))
}
