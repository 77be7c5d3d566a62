//! REST handlers for districts.
//!
//! Reads answer in JSON, writes answer with a fixed plain-text acknowledgment.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use covid19_app::ports::{DistrictRepository, StateRepository};
use covid19_domain::district::{District, DistrictDetails};
use covid19_domain::id::DistrictId;
use covid19_domain::state::StateName;

use crate::error::TextError;
use crate::state::AppState;

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Added,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Added => "District Successfully Added".into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<District>),
    /// No district matched; answered with an empty `200`.
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

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated => "District Details Updated".into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Removed,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Removed => "District Removed".into_response(),
        }
    }
}

/// Possible responses from the details endpoint.
pub enum StateNameResponse {
    Ok(Json<StateName>),
    /// No district (or no owning state) matched; answered with an empty `200`.
    Empty,
}

impl IntoResponse for StateNameResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /districts/`
pub async fn create<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    body: Result<Json<DistrictDetails>, JsonRejection>,
) -> Result<CreateResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let Json(details) = body?;
    state.district_service.create_district(details).await?;
    Ok(CreateResponse::Added)
}

/// `GET /districts/{district_id}`
pub async fn get<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let Ok(district_id) = id.parse::<DistrictId>() else {
        return Ok(GetResponse::Empty);
    };
    let found = state.district_service.get_district(district_id).await?;
    Ok(found.map_or(GetResponse::Empty, |d| GetResponse::Ok(Json(d))))
}

/// `PUT /districts/{district_id}`
pub async fn update<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
    body: Result<Json<DistrictDetails>, JsonRejection>,
) -> Result<UpdateResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let Json(details) = body?;
    if let Ok(district_id) = id.parse::<DistrictId>() {
        state
            .district_service
            .update_district(district_id, details)
            .await?;
    }
    Ok(UpdateResponse::Updated)
}

/// `DELETE /districts/{district_id}`
pub async fn delete<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    if let Ok(district_id) = id.parse::<DistrictId>() {
        state.district_service.delete_district(district_id).await?;
    }
    Ok(DeleteResponse::Removed)
}

/// `GET /districts/{district_id}/details/`
pub async fn state_name<SR, DR>(
    State(state): State<AppState<SR, DR>>,
    Path(id): Path<String>,
) -> Result<StateNameResponse, TextError>
where
    SR: StateRepository + Send + Sync + 'static,
    DR: DistrictRepository + Send + Sync + 'static,
{
    let Ok(district_id) = id.parse::<DistrictId>() else {
        return Ok(StateNameResponse::Empty);
    };
    let found = state
        .district_service
        .get_district_state_name(district_id)
        .await?;
    Ok(found.map_or(StateNameResponse::Empty, |n| {
        StateNameResponse::Ok(Json(n))
    }))
}
