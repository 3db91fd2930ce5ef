//! Domain model for animal records.
//!
//! One struct serves both roles the collection has: decoding persisted
//! documents and encoding insert payloads. Wire names follow the legacy
//! collection layout, so documents written by earlier deployments keep
//! decoding.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Geographic point attached to an animal record.
///
/// Carried verbatim; no geospatial semantics are enforced anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// GeoJSON-style type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Longitude/latitude pair.
    pub coordinates: [f64; 2],
}

/// A single animal document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Store-assigned identifier. Absent until the document is inserted,
    /// immutable afterwards.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Required on create; the only validated field.
    #[serde(default)]
    pub animal_name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub birthdate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub owner: String,
    /// Legacy revision counter. Decoded for compatibility with old
    /// documents, never written back or interpreted.
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}
