use crate::error::ApiError;
use crate::models::{AddAdminRequest, Admin};
use crate::routes;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

/// POST /addAdmin handler - Append an admin email
///
/// The list is append-only and enforces no uniqueness; posting the same
/// email twice yields two entries.
#[utoipa::path(
    post,
    path = routes::ADD_ADMIN,
    request_body = AddAdminRequest,
    responses(
        (status = 200, description = "Admin stored", body = bool),
        (status = 500, description = "Database error")
    ),
    tag = "admins"
)]
pub async fn add_admin(
    State(state): State<AppState>,
    Json(body): Json<AddAdminRequest>,
) -> Result<Json<bool>, ApiError> {
    let inserted = state.store.insert_admin(&body.email).await?;
    tracing::info!("Stored admin '{}'", body.email);
    Ok(Json(inserted))
}

/// GET /admins handler - List all admin emails
#[utoipa::path(
    get,
    path = routes::ADMINS,
    responses(
        (status = 200, description = "All admins", body = [Admin]),
        (status = 500, description = "Database error")
    ),
    tag = "admins"
)]
pub async fn list_admins(State(state): State<AppState>) -> Result<Json<Vec<Admin>>, ApiError> {
    let admins = state.store.list_admins().await?;
    Ok(Json(admins))
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
                .route(crate::routes::ADD_ADMIN, post(add_admin))
                .route(crate::routes::ADMINS, get(list_admins))
                .with_state(state),
        )
    }

    #[tokio::test]
    async fn test_duplicate_admin_emails_both_succeed() {
        let Some(app) = setup_test_app("Duplicate admins test").await else {
            return;
        };

        let email = format!("{}@example.com", ObjectId::new().to_hex());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/addAdmin")
                        .header("content-type", "application/json")
                        .body(Body::from(
                            serde_json::json!({ "email": &email }).to_string(),
                        ))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let inserted: bool = serde_json::from_slice(&body).unwrap();
            assert!(inserted);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/admins")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let admins: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        let ours = admins.iter().filter(|a| a["email"] == email).count();
        assert_eq!(ours, 2);
    }
}
