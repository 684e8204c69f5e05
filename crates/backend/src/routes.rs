use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};

use crate::system::auth::middleware::{require_auth, require_manager};
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // A001 ORDERS (any staff role)
        // ========================================
        .route(
            "/api/orders",
            get(handlers::a001_order::list_all).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/orders/testdata",
            post(handlers::a001_order::insert_test_data)
                .layer(middleware::from_fn(require_manager)),
        )
        .route(
            "/api/orders/:id",
            get(handlers::a001_order::get_by_id).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/orders/:id/status",
            patch(handlers::a001_order::update_status).layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // A002 CUSTOMERS (owner / manager)
        // ========================================
        .route(
            "/api/customers",
            get(handlers::a002_customer::list_all).layer(middleware::from_fn(require_manager)),
        )
        .route(
            "/api/customers/testdata",
            post(handlers::a002_customer::insert_test_data)
                .layer(middleware::from_fn(require_manager)),
        )
        .route(
            "/api/customers/:id",
            get(handlers::a002_customer::get_by_id).layer(middleware::from_fn(require_manager)),
        )
        // ========================================
        // A003 INVENTORY (owner / manager)
        // ========================================
        .route(
            "/api/inventory",
            get(handlers::a003_inventory_item::list_all)
                .layer(middleware::from_fn(require_manager)),
        )
        .route(
            "/api/inventory/testdata",
            post(handlers::a003_inventory_item::insert_test_data)
                .layer(middleware::from_fn(require_manager)),
        )
        .route(
            "/api/inventory/:id/stock",
            put(handlers::a003_inventory_item::update_stock)
                .layer(middleware::from_fn(require_manager)),
        )
}
