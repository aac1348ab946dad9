use utoipa::OpenApi;

use crate::handlers;
use crate::image::ImageFile;
use crate::models::{
    AddAdminRequest, Admin, HealthResponse, OrdersQuery, Review, Service, UpdateStatusRequest,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "agency-api",
        version = "1.0.0",
        description = "Services/reviews/orders marketplace backend over MongoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::services::add_service,
        handlers::services::list_services,
        handlers::services::get_service,
        handlers::reviews::add_review,
        handlers::reviews::list_reviews,
        handlers::orders::add_order,
        handlers::orders::orders_by_email,
        handlers::orders::list_orders,
        handlers::orders::update_order_status,
        handlers::admins::add_admin,
        handlers::admins::list_admins
    ),
    components(
        schemas(
            Service,
            Review,
            Admin,
            ImageFile,
            AddAdminRequest,
            UpdateStatusRequest,
            OrdersQuery,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "services", description = "Service catalog operations"),
        (name = "reviews", description = "Customer review operations"),
        (name = "orders", description = "Order placement and tracking"),
        (name = "admins", description = "Admin email list")
    )
)]
pub struct ApiDoc;
