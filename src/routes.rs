use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const ADD_SERVICES: &str = "/addServices";
pub const SERVICES: &str = "/services";
pub const SERVICE_ITEM: &str = "/services/{id}";
pub const ADD_REVIEW: &str = "/addReview";
pub const REVIEWS: &str = "/reviews";
// Casing matches what the deployed frontend already calls
pub const ADD_ORDERS: &str = "/Addorders";
pub const ORDERS: &str = "/orders";
pub const ORDER_LIST: &str = "/orderList";
pub const ADD_ADMIN: &str = "/addAdmin";
pub const ADMINS: &str = "/admins";
pub const UPDATE_ORDER: &str = "/update/{id}";
pub const HEALTH: &str = "/health";

// Upload bodies embed whole images; 50 MB ceiling
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Assemble the application router.
///
/// Unmatched paths fall through to the static asset directory, served
/// verbatim.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(ADD_SERVICES, post(handlers::add_service))
        .route(SERVICES, get(handlers::list_services))
        .route(SERVICE_ITEM, get(handlers::get_service))
        .route(ADD_REVIEW, post(handlers::add_review))
        .route(REVIEWS, get(handlers::list_reviews))
        .route(ADD_ORDERS, post(handlers::add_order))
        .route(ORDERS, get(handlers::orders_by_email))
        .route(ORDER_LIST, get(handlers::list_orders))
        .route(ADD_ADMIN, post(handlers::add_admin))
        .route(ADMINS, get(handlers::list_admins))
        .route(UPDATE_ORDER, patch(handlers::update_order_status))
        .route(HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_dir)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
