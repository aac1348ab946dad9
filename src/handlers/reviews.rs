use crate::error::ApiError;
use crate::image::ImageFile;
use crate::models::Review;
use crate::routes;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Multipart, State};

/// POST /addReview handler - Collect a customer review
///
/// Expects text fields `name`, `description`, `designation`; a `file` part
/// is optional, and reviews posted without one insert fine.
#[utoipa::path(
    post,
    path = routes::ADD_REVIEW,
    responses(
        (status = 200, description = "Review stored", body = bool),
        (status = 400, description = "Missing field or bad multipart body"),
        (status = 500, description = "Database error")
    ),
    tag = "reviews"
)]
pub async fn add_review(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<bool>, ApiError> {
    let mut name = None;
    let mut description = None;
    let mut designation = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("designation") => designation = Some(field.text().await?),
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field.bytes().await?;
                image = Some(ImageFile::new(content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let name = name.ok_or(ApiError::MissingField("name"))?;
    let description = description.ok_or(ApiError::MissingField("description"))?;
    let designation = designation.ok_or(ApiError::MissingField("designation"))?;

    let inserted = state
        .store
        .insert_review(&name, &description, &designation, image.as_ref())
        .await?;

    tracing::info!("Stored review from '{}'", name);
    Ok(Json(inserted))
}

/// GET /reviews handler - List all reviews
#[utoipa::path(
    get,
    path = routes::REVIEWS,
    responses(
        (status = 200, description = "All reviews", body = [Review]),
        (status = 500, description = "Database error")
    ),
    tag = "reviews"
)]
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.store.list_reviews().await?;
    Ok(Json(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::StoreClient;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use mongodb::bson::oid::ObjectId;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "agency-test-boundary";

    fn text_part(name: &str, value: &str) -> Vec<u8> {
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        )
        .into_bytes()
    }

    fn file_part(name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            BOUNDARY, name, filename, content_type
        )
        .into_bytes();
        part.extend_from_slice(bytes);
        part.extend_from_slice(b"\r\n");
        part
    }

    fn multipart_request(uri: &str, parts: Vec<Vec<u8>>) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(&part);
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn setup_test_app(test_name: &str) -> Option<Router> {
        let config = Config {
            mongodb_uri: "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000".to_string(),
            db_name: "agency_test".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            static_dir: "service".to_string(),
        };

        let store = match StoreClient::from_config(&config).await {
            Ok(store) => store,
            Err(_) => {
                println!("{} skipped (local MongoDB may not be running)", test_name);
                return None;
            }
        };

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        Some(
            Router::new()
                .route(crate::routes::ADD_REVIEW, post(add_review))
                .route(crate::routes::REVIEWS, get(list_reviews))
                .with_state(state),
        )
    }

    #[tokio::test]
    async fn test_add_review_with_image() {
        let Some(app) = setup_test_app("Review with image test").await else {
            return;
        };

        let marker = ObjectId::new().to_hex();
        let request = multipart_request(
            "/addReview",
            vec![
                text_part("name", &marker),
                text_part("description", "spotless result"),
                text_part("designation", "Founder"),
                file_part("file", "me.jpg", "image/jpeg", &[7, 7, 7]),
            ],
        );

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reviews")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let reviews: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        let stored = reviews
            .iter()
            .find(|r| r["name"] == marker)
            .expect("inserted review should be listed");
        assert_eq!(stored["designation"], "Founder");
        assert_eq!(stored["image"]["contentType"], "image/jpeg");
    }

    #[tokio::test]
    async fn test_add_review_without_image() {
        let Some(app) = setup_test_app("Review without image test").await else {
            return;
        };

        let marker = ObjectId::new().to_hex();
        let request = multipart_request(
            "/addReview",
            vec![
                text_part("name", &marker),
                text_part("description", "good value"),
                text_part("designation", "Manager"),
            ],
        );

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reviews")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let reviews: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        let stored = reviews.iter().find(|r| r["name"] == marker).unwrap();
        assert!(stored.get("image").is_none());
    }

    #[tokio::test]
    async fn test_add_review_missing_designation() {
        let Some(app) = setup_test_app("Review missing field test").await else {
            return;
        };

        let request = multipart_request(
            "/addReview",
            vec![
                text_part("name", "anonymous"),
                text_part("description", "no title given"),
            ],
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let message = String::from_utf8(body.to_vec()).unwrap();
        assert!(message.contains("designation"));
    }
}
