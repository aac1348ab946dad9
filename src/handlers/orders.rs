use crate::error::ApiError;
use crate::models::{OrdersQuery, UpdateStatusRequest, document_to_json};
use crate::routes;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use mongodb::bson::oid::ObjectId;
use serde_json::Value as JsonValue;

/// POST /Addorders handler - Place an order
///
/// The body is inserted verbatim; an `email` field is what later makes the
/// order retrievable through the per-email query.
#[utoipa::path(
    post,
    path = routes::ADD_ORDERS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Order stored", body = bool),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Database error")
    ),
    tag = "orders"
)]
pub async fn add_order(
    State(state): State<AppState>,
    Json(order): Json<JsonValue>,
) -> Result<Json<bool>, ApiError> {
    let document = mongodb::bson::to_document(&order)
        .map_err(|_| ApiError::InvalidBody("Order body must be a JSON object".to_string()))?;

    let inserted = state.store.insert_order(document).await?;
    tracing::info!("Stored order");
    Ok(Json(inserted))
}

/// GET /orders handler - List orders for one email
#[utoipa::path(
    get,
    path = routes::ORDERS,
    params(
        ("email" = String, Query, description = "Email the orders were placed with")
    ),
    responses(
        (status = 200, description = "Matching orders, possibly empty", body = [serde_json::Value]),
        (status = 500, description = "Database error")
    ),
    tag = "orders"
)]
pub async fn orders_by_email(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let orders = state.store.orders_by_email(&query.email).await?;
    Ok(Json(orders.into_iter().map(document_to_json).collect()))
}

/// GET /orderList handler - List all orders
#[utoipa::path(
    get,
    path = routes::ORDER_LIST,
    responses(
        (status = 200, description = "All orders", body = [serde_json::Value]),
        (status = 500, description = "Database error")
    ),
    tag = "orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<JsonValue>>, ApiError> {
    let orders = state.store.list_orders().await?;
    Ok(Json(orders.into_iter().map(document_to_json).collect()))
}

/// PATCH /update/{id} handler - Set an order's status
///
/// Status is free text with no transition graph. The response reports
/// whether a document actually changed, so a nonexistent id yields `false`
/// rather than an error.
#[utoipa::path(
    patch,
    path = routes::UPDATE_ORDER,
    params(
        ("id" = String, Path, description = "Hex ObjectId of the order")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Whether a document changed", body = bool),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database error")
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<bool>, ApiError> {
    let id = ObjectId::parse_str(&id_str)
        .map_err(|_| ApiError::InvalidObjectId(id_str.clone()))?;

    let modified = state.store.set_order_status(id, &body.status).await?;
    tracing::info!("Status update for order {}: modified = {}", id, modified);
    Ok(Json(modified))
}
