pub mod admins;
pub mod health;
pub mod orders;
pub mod reviews;
pub mod services;

pub use admins::{add_admin, list_admins};
pub use health::health_handler;
pub use orders::{add_order, list_orders, orders_by_email, update_order_status};
pub use reviews::{add_review, list_reviews};
pub use services::{add_service, get_service, list_services};
