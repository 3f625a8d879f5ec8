use axum::{
    Router,
    routing::{get, put},
};

pub mod categories;
pub mod movements;
pub mod products;
pub mod system;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route(
            "/produtos",
            get(products::list_products).post(products::create_product),
        )
        .route("/produtos/vencendo", get(products::list_near_expiry))
        .route("/produtos/estoque-baixo", get(products::list_low_stock))
        .route("/produtos/:id", put(products::update_product))
        .route(
            "/produtos/:id/movimentos",
            get(movements::list_movements).post(movements::record_movement),
        )
        .route(
            "/categorias",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/version", get(system::version))
}
