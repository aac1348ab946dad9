use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::image::ImageFile;

/// A service offered on the marketplace, created via upload
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Service {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub image: ImageFile,
}

/// A customer review; the image is optional
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Review {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageFile>,
}

/// One entry in the flat admin email list
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Admin {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub email: String,
}

/// Request body for POST /addAdmin
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddAdminRequest {
    pub email: String,
}

/// Request body for PATCH /update/{id}
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Query parameters for GET /orders
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct OrdersQuery {
    pub email: String,
}

/// Response type for the liveness probe
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Renders a verbatim order document as response JSON.
///
/// Orders are stored with whatever fields the caller sent, so there is no
/// struct to deserialize into. The store-assigned `_id` is flattened to its
/// hex form, matching how the typed models serialize theirs.
pub fn document_to_json(doc: Document) -> JsonValue {
    let mut value = Bson::Document(doc).into_relaxed_extjson();
    if let Some(fields) = value.as_object_mut() {
        let hex = fields
            .get("_id")
            .and_then(|id| id.get("$oid"))
            .and_then(JsonValue::as_str)
            .map(str::to_owned);
        if let Some(hex) = hex {
            fields.insert("_id".to_string(), JsonValue::String(hex));
        }
    }
    value
}
