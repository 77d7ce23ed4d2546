//! The REST surface: axum router, shared state, auth extractors, and the
//! per-resource route modules.

pub mod admin_routes;
pub mod auth_routes;
pub mod cart_routes;
pub mod delivery_routes;
pub mod error;
pub mod extract;
pub mod favorite_routes;
pub mod order_routes;
pub mod product_routes;
pub mod recycle_routes;
pub mod user_routes;

pub use error::ApiError;
pub use extract::{AdminUser, AuthUser};

/// Distinguishes an absent key (leave the field unchanged) from an explicit
/// `null` (clear it) in PATCH-style request bodies.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(de).map(Some)
    }
}

use crate::app_system::StoreSystem;
use crate::auth::JwtKeys;
use crate::clients::{
    CartClient, CommentClient, FavoriteClient, OrderClient, ProductClient, RecycledClient,
    SessionClient, UserClient,
};
use crate::integrations::Geocoder;
use axum::routing::{delete, get, post, put};
use axum::Router;
use chrono::Duration;
use std::sync::Arc;

/// Everything a handler can reach. Payment and mail live inside the order
/// client; the geocoder is here because the delivery route calls it directly.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub cart: CartClient,
    pub orders: OrderClient,
    pub favorites: FavoriteClient,
    pub comments: CommentClient,
    pub recycled: RecycledClient,
    pub sessions: SessionClient,
    pub jwt: JwtKeys,
    pub token_ttl: Duration,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(
        system: &StoreSystem,
        jwt: JwtKeys,
        token_ttl: Duration,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            users: system.user_client.clone(),
            products: system.product_client.clone(),
            cart: system.cart_client.clone(),
            orders: system.order_client.clone(),
            favorites: system.favorite_client.clone(),
            comments: system.comment_client.clone(),
            recycled: system.recycled_client.clone(),
            sessions: system.session_client.clone(),
            jwt,
            token_ttl,
            geocoder,
        }
    }
}

/// Builds the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // auth + profile
        .route("/api/auth/register", post(auth_routes::register))
        .route("/api/auth/login", post(auth_routes::login))
        .route("/api/auth/logout", post(auth_routes::logout))
        .route(
            "/api/users/me",
            get(user_routes::get_me).put(user_routes::update_me),
        )
        // catalog
        .route("/api/products", get(product_routes::list_products))
        .route("/api/products/:id", get(product_routes::get_product))
        .route(
            "/api/products/:id/comments",
            get(product_routes::list_comments).post(product_routes::add_comment),
        )
        // cart
        .route(
            "/api/cart",
            get(cart_routes::list_cart).post(cart_routes::add_to_cart),
        )
        .route(
            "/api/cart/:id",
            put(cart_routes::update_cart_item).delete(cart_routes::remove_cart_item),
        )
        // favorites
        .route(
            "/api/favorites",
            get(favorite_routes::list_favorites).post(favorite_routes::add_favorite),
        )
        .route("/api/favorites/:id", delete(favorite_routes::remove_favorite))
        // orders
        .route(
            "/api/orders",
            get(order_routes::list_orders).post(order_routes::checkout),
        )
        .route("/api/orders/:id", get(order_routes::get_order))
        .route("/api/orders/:id/return", post(order_routes::initiate_return))
        // delivery
        .route(
            "/api/delivery/parcel-shops",
            get(delivery_routes::parcel_shops),
        )
        // recycle marketplace
        .route(
            "/api/recycle",
            get(recycle_routes::list_public).post(recycle_routes::create_listing),
        )
        .route("/api/recycle/mine", get(recycle_routes::list_mine))
        .route(
            "/api/recycle/:id",
            put(recycle_routes::update_listing).delete(recycle_routes::delete_listing),
        )
        // admin
        .route("/api/admin/orders", get(admin_routes::list_all_orders))
        .route(
            "/api/admin/orders/:id/status",
            put(admin_routes::set_order_status),
        )
        .route("/api/admin/products", post(admin_routes::create_product))
        .route(
            "/api/admin/products/:id",
            put(admin_routes::update_product).delete(admin_routes::delete_product),
        )
        .with_state(state)
}
