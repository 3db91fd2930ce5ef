//! Animal record handlers.

use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{AnimalRecord, AnimalRepository, Database, DbError, Location};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Location DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    /// GeoJSON-style type tag
    #[serde(rename = "type")]
    #[schema(example = "Point")]
    pub kind: String,
    /// Longitude/latitude pair
    #[schema(example = json!([24.94, 60.17]))]
    pub coordinates: [f64; 2],
}

impl From<Location> for LocationDto {
    fn from(l: Location) -> Self {
        Self {
            kind: l.kind,
            coordinates: l.coordinates,
        }
    }
}

impl From<LocationDto> for Location {
    fn from(l: LocationDto) -> Self {
        Self {
            kind: l.kind,
            coordinates: l.coordinates,
        }
    }
}

/// Animal record response DTO
#[derive(Serialize, ToSchema)]
pub struct AnimalResponse {
    /// Store-assigned identifier (24-character hex)
    #[schema(example = "65f0a1b2c3d4e5f6a7b8c9d0")]
    pub id: String,
    /// Animal name
    #[schema(example = "Rex")]
    pub animal_name: String,
    /// Species label
    #[schema(example = "dog")]
    pub species: String,
    /// Date of birth
    pub birthdate: Option<DateTime<Utc>>,
    /// Last known location
    pub location: Option<LocationDto>,
    /// Owner name
    #[schema(example = "Alice")]
    pub owner: String,
}

impl From<AnimalRecord> for AnimalResponse {
    fn from(a: AnimalRecord) -> Self {
        Self {
            id: a.id.map(|id| id.to_hex()).unwrap_or_default(),
            animal_name: a.animal_name,
            species: a.species,
            birthdate: a.birthdate,
            location: a.location.map(LocationDto::from),
            owner: a.owner,
        }
    }
}

/// Create animal request DTO
///
/// Unknown body fields (an `_id`, a legacy `__v`) are ignored; the store
/// assigns the real id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnimalRequest {
    /// Animal name, must be non-empty
    #[serde(default)]
    #[schema(example = "Rex")]
    pub animal_name: String,
    /// Species label
    #[serde(default)]
    #[schema(example = "dog")]
    pub species: String,
    /// Date of birth
    #[serde(default)]
    pub birthdate: Option<DateTime<Utc>>,
    /// Last known location
    #[serde(default)]
    pub location: Option<LocationDto>,
    /// Owner name
    #[serde(default)]
    #[schema(example = "Alice")]
    pub owner: String,
}

/// Update animal request DTO
///
/// The full replacement field set: a field left out of the body overwrites
/// the stored value with its zero value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAnimalRequest {
    /// Animal name
    #[serde(default)]
    #[schema(example = "Rex")]
    pub animal_name: String,
    /// Species label
    #[serde(default)]
    #[schema(example = "dog")]
    pub species: String,
    /// Date of birth
    #[serde(default)]
    pub birthdate: Option<DateTime<Utc>>,
    /// Last known location
    #[serde(default)]
    pub location: Option<LocationDto>,
    /// Owner name
    #[serde(default)]
    #[schema(example = "Alice")]
    pub owner: String,
}

/// Create response DTO
#[derive(Serialize, ToSchema)]
pub struct CreateAnimalResponse {
    /// Success message
    #[schema(example = "Animal added successfully")]
    pub message: String,
    /// Store-assigned identifier of the new record
    #[schema(example = "65f0a1b2c3d4e5f6a7b8c9d0")]
    pub id: String,
}

/// Update response DTO
#[derive(Serialize, ToSchema)]
pub struct UpdateAnimalResponse {
    /// Success message
    #[schema(example = "Animal updated successfully")]
    pub message: String,
    /// Number of documents the update actually changed (0 or 1)
    pub modified_count: u64,
}

/// Plain success message DTO
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Success message
    #[schema(example = "Animal deleted successfully")]
    pub message: String,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Animal not found")]
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all animals
///
/// Returns every record in the collection, unfiltered
#[utoipa::path(
    get,
    path = "/api/animals",
    tag = "animals",
    responses(
        (status = 200, description = "Every animal record in the collection", body = Vec<AnimalResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_animals<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<AnimalResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let animals = state
        .db()
        .animals()
        .list()
        .await
        .map_err(internal_error)?;

    Ok(Json(
        animals.into_iter().map(AnimalResponse::from).collect(),
    ))
}

/// Create a new animal
///
/// Inserts one record; the store assigns the id, which is returned
#[utoipa::path(
    post,
    path = "/api/animals",
    tag = "animals",
    request_body = CreateAnimalRequest,
    responses(
        (status = 201, description = "Animal created", body = CreateAnimalResponse),
        (status = 400, description = "Empty name or malformed body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_animal<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAnimalResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(bad_body)?;

    if req.animal_name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Animal name cannot be empty".to_string(),
            }),
        ));
    }

    let animal = AnimalRecord {
        id: None, // the store assigns the real id
        animal_name: req.animal_name,
        species: req.species,
        birthdate: req.birthdate,
        location: req.location.map(Location::from),
        owner: req.owner,
        version: None,
    };

    let id = state
        .db()
        .animals()
        .insert(&animal)
        .await
        .map_err(internal_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAnimalResponse {
            message: "Animal added successfully".to_string(),
            id: id.to_hex(),
        }),
    ))
}

/// Update an animal
///
/// Overwrites the full mutable field set of the matching record
#[utoipa::path(
    put,
    path = "/api/animals/{id}",
    tag = "animals",
    params(
        ("id" = String, Path, description = "Animal ID (24-character hex)")
    ),
    request_body = UpdateAnimalRequest,
    responses(
        (status = 200, description = "Animal updated", body = UpdateAnimalResponse),
        (status = 400, description = "Invalid id or malformed body", body = ErrorResponse),
        (status = 404, description = "Animal not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_animal<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAnimalRequest>, JsonRejection>,
) -> Result<Json<UpdateAnimalResponse>, (StatusCode, Json<ErrorResponse>)> {
    let object_id = parse_object_id(&id)?;
    let Json(req) = payload.map_err(bad_body)?;

    let animal = AnimalRecord {
        id: None,
        animal_name: req.animal_name,
        species: req.species,
        birthdate: req.birthdate,
        location: req.location.map(Location::from),
        owner: req.owner,
        version: None,
    };

    let outcome = state
        .db()
        .animals()
        .replace(object_id, &animal)
        .await
        .map_err(internal_error)?;

    if outcome.matched == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Animal not found".to_string(),
            }),
        ));
    }

    Ok(Json(UpdateAnimalResponse {
        message: "Animal updated successfully".to_string(),
        modified_count: outcome.modified,
    }))
}

/// Delete an animal
///
/// Removing an absent record still succeeds, so the operation is idempotent
/// from the caller's perspective
#[utoipa::path(
    delete,
    path = "/api/animals/{id}",
    tag = "animals",
    params(
        ("id" = String, Path, description = "Animal ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Animal deleted (or was already gone)", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_animal<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let object_id = parse_object_id(&id)?;

    state
        .db()
        .animals()
        .delete(object_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(MessageResponse {
        message: "Animal deleted successfully".to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_object_id(id: &str) -> Result<ObjectId, (StatusCode, Json<ErrorResponse>)> {
    ObjectId::parse_str(id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid animal ID".to_string(),
            }),
        )
    })
}

fn bad_body(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Failed to parse request body: {rejection}"),
        }),
    )
}

fn internal_error(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
