use crate::actor_framework::ResourceActor;
use crate::clients::{
    CartClient, CommentClient, FavoriteClient, OrderClient, ProductClient, RecycledClient,
    SessionClient, UserClient,
};
use crate::domain::{CartItem, Comment, Favorite, Order, Product, RecycledProduct, Session, User};
use crate::integrations::{Mailer, PaymentGateway};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

const ACTOR_BUFFER: usize = 64;

fn next_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// The main application system: one actor per collection, wired clients,
/// lifecycle management. The HTTP layer only ever talks to the clients.
pub struct StoreSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub favorite_client: FavoriteClient,
    pub comment_client: CommentClient,
    pub recycled_client: RecycledClient,
    pub session_client: SessionClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new(payment: Arc<dyn PaymentGateway>, mailer: Arc<dyn Mailer>) -> Self {
        // 1. Collection actors
        let (user_actor, user_resource) = ResourceActor::<User>::new(ACTOR_BUFFER, next_uuid);
        let (product_actor, product_resource) =
            ResourceActor::<Product>::new(ACTOR_BUFFER, next_uuid);
        let (cart_actor, cart_resource) = ResourceActor::<CartItem>::new(ACTOR_BUFFER, next_uuid);
        let (order_actor, order_resource) = ResourceActor::<Order>::new(ACTOR_BUFFER, next_uuid);
        let (favorite_actor, favorite_resource) =
            ResourceActor::<Favorite>::new(ACTOR_BUFFER, next_uuid);
        let (comment_actor, comment_resource) =
            ResourceActor::<Comment>::new(ACTOR_BUFFER, next_uuid);
        let (recycled_actor, recycled_resource) =
            ResourceActor::<RecycledProduct>::new(ACTOR_BUFFER, next_uuid);
        let (session_actor, session_resource) =
            ResourceActor::<Session>::new(ACTOR_BUFFER, next_uuid);

        // 2. Clients, wired in dependency order
        let user_client = UserClient::new(user_resource);
        let product_client = ProductClient::new(product_resource);
        let cart_client = CartClient::new(cart_resource, product_client.clone());
        let order_client = OrderClient::new(
            order_resource,
            user_client.clone(),
            product_client.clone(),
            cart_client.clone(),
            payment,
            mailer,
        );
        let favorite_client = FavoriteClient::new(favorite_resource);
        let comment_client = CommentClient::new(comment_resource);
        let recycled_client = RecycledClient::new(recycled_resource);
        let session_client = SessionClient::new(session_resource);

        // 3. Spawn everything
        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(cart_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(favorite_actor.run()),
            tokio::spawn(comment_actor.run()),
            tokio::spawn(recycled_actor.run()),
            tokio::spawn(session_actor.run()),
        ];

        info!("Store system started: 8 collection actors running");

        Self {
            user_client,
            product_client,
            cart_client,
            order_client,
            favorite_client,
            comment_client,
            recycled_client,
            session_client,
            handles,
        }
    }

    /// Drops every client (closing the actor channels) and waits for the
    /// actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.user_client);
        drop(self.product_client);
        drop(self.cart_client);
        drop(self.order_client);
        drop(self.favorite_client);
        drop(self.comment_client);
        drop(self.recycled_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
