use crate::error::ApiError;
use crate::image::ImageFile;
use crate::models::Service;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::{Json, extract::multipart::Field};
use mongodb::bson::oid::ObjectId;

/// Pulls the declared MIME type and raw bytes out of an upload field.
async fn read_upload(field: Field<'_>) -> Result<ImageFile, ApiError> {
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_owned();
    let bytes = field.bytes().await?;
    Ok(ImageFile::new(content_type, bytes.to_vec()))
}

/// POST /addServices handler - Create a service from a multipart upload
///
/// Expects text fields `title` and `description` plus a `file` part whose
/// bytes are embedded into the stored document. Responds with a bare
/// boolean; the generated id is not reported back.
#[utoipa::path(
    post,
    path = routes::ADD_SERVICES,
    responses(
        (status = 200, description = "Service stored", body = bool),
        (status = 400, description = "Missing field or bad multipart body"),
        (status = 500, description = "Database error")
    ),
    tag = "services"
)]
pub async fn add_service(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<bool>, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("title") => title = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("file") => image = Some(read_upload(field).await?),
            _ => {}
        }
    }

    let title = title.ok_or(ApiError::MissingField("title"))?;
    let description = description.ok_or(ApiError::MissingField("description"))?;
    let image = image.ok_or(ApiError::MissingField("file"))?;

    let inserted = state
        .store
        .insert_service(&title, &description, &image)
        .await?;

    tracing::info!("Stored service '{}' ({} bytes)", title, image.size);
    Ok(Json(inserted))
}

/// GET /services handler - List all services
#[utoipa::path(
    get,
    path = routes::SERVICES,
    responses(
        (status = 200, description = "All services", body = [Service]),
        (status = 500, description = "Database error")
    ),
    tag = "services"
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let services = state.store.list_services().await?;
    Ok(Json(services))
}

/// GET /services/{id} handler - Fetch one service
///
/// An id the store never issued yields a `null` body, not an error.
#[utoipa::path(
    get,
    path = routes::SERVICE_ITEM,
    params(
        ("id" = String, Path, description = "Hex ObjectId of the service")
    ),
    responses(
        (status = 200, description = "Service, or null when absent", body = Service),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database error")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Option<Service>>, ApiError> {
    let id = ObjectId::parse_str(&id_str)
        .map_err(|_| ApiError::InvalidObjectId(id_str.clone()))?;

    let service = state.store.find_service(id).await?;
    tracing::debug!("Service lookup for {}: found = {}", id, service.is_some());
    Ok(Json(service))
}
