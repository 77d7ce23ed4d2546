use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::{CartClient, ProductClient, UserClient};
use crate::domain::{Order, OrderCreate, OrderItem, OrderStatus};
use crate::integrations::{Mailer, PaymentGateway};
use crate::order_actor::{OrderAction, OrderError, OrderFilter};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Client for the order collection.
///
/// Checkout is the one truly orchestrated flow in the system: it validates the
/// user, walks the cart, reserves stock, creates the hosted payment intent,
/// persists the order, clears the cart and fires the confirmation email.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
    cart_client: CartClient,
    payment: Arc<dyn PaymentGateway>,
    mailer: Arc<dyn Mailer>,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
        cart_client: CartClient,
        payment: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
            cart_client,
            payment,
            mailer,
        }
    }

    /// Places an order from the user's current cart.
    ///
    /// Straight-line, no compensation: a failure after stock was reserved
    /// leaves the reservation in place.
    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        user_id: String,
        shipping_address: String,
        parcel_shop_id: Option<String>,
    ) -> Result<Order, OrderError> {
        info!("Processing checkout");

        // Step 1: validate the user
        let user = match self.user_client.get_user(user_id.clone()).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!("User not found");
                return Err(OrderError::InvalidUser(user_id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::InvalidUser(e.to_string()));
            }
        };

        // Step 2: snapshot the cart
        let cart_rows = self
            .cart_client
            .list_for_user(user_id.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if cart_rows.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        // Step 3: price each row against the catalog and reserve stock
        let mut items = Vec::with_capacity(cart_rows.len());
        let mut total_cents: i64 = 0;
        for row in &cart_rows {
            let product = self
                .product_client
                .get_product(row.product_id.clone())
                .await
                .map_err(|e| OrderError::InvalidProduct(e.to_string()))?
                .ok_or_else(|| OrderError::InvalidProduct(row.product_id.clone()))?;

            self.product_client
                .reserve_stock(row.product_id.clone(), row.quantity)
                .await
                .map_err(|e| {
                    error!(product_id = %row.product_id, error = %e, "Stock reservation failed");
                    OrderError::InsufficientStock(e.to_string())
                })?;

            total_cents += product.price_cents * i64::from(row.quantity);
            items.push(OrderItem {
                product_id: product.id,
                name: product.name,
                size: row.size.clone(),
                quantity: row.quantity,
                unit_price_cents: product.price_cents,
            });
        }

        info!(total_cents, "Cart priced and stock reserved");

        // Step 4: create the hosted payment intent (thin pass-through)
        let intent = self
            .payment
            .create_intent(total_cents, "eur")
            .await
            .map_err(|e| {
                error!(error = %e, "Payment intent creation failed");
                OrderError::PaymentFailed(e.to_string())
            })?;

        // Step 5: persist the order
        let order_id = self
            .inner
            .create(OrderCreate {
                user_id: user_id.clone(),
                items,
                total_cents,
                payment_intent_id: intent.id,
                shipping_address,
                parcel_shop_id,
            })
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => OrderError::ValidationError(msg),
                other => map_order_err(other),
            })?;

        let order = self
            .inner
            .get(order_id.clone())
            .await
            .map_err(map_order_err)?
            .ok_or(OrderError::NotFound(order_id))?;

        // Step 6: empty the cart; an order already exists, so just log failures
        if let Err(e) = self.cart_client.clear(user_id).await {
            warn!(error = %e, "Failed to clear cart after checkout");
        }

        // Step 7: confirmation email in the background
        let mailer = Arc::clone(&self.mailer);
        let to = user.email.clone();
        let subject = format!("Order {} confirmed", order.id);
        let body = format!(
            "Thank you {}! Your order of {} item(s) totalling {:.2} EUR is being prepared.",
            user.name,
            order.items.len(),
            order.total_cents as f64 / 100.0
        );
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, &subject, &body).await {
                warn!(error = %e, "Order confirmation email failed");
            }
        });

        info!(order_id = %order.id, "Checkout complete");
        Ok(order)
    }

    /// Owner-scoped fetch: another user's order reads as absent.
    #[instrument(skip(self))]
    pub async fn get_order_for_user(
        &self,
        id: String,
        user_id: String,
    ) -> Result<Option<Order>, OrderError> {
        let order = self.inner.get(id).await.map_err(map_order_err)?;
        Ok(order.filter(|o| o.user_id == user_id))
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: String) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(OrderFilter::ByUser(user_id))
            .await
            .map_err(map_order_err)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list(OrderFilter::All).await.map_err(map_order_err)
    }

    /// Admin status change, stored as sent.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: String, status: OrderStatus) -> Result<Order, OrderError> {
        self.inner
            .perform_action(id.clone(), OrderAction::SetStatus(status))
            .await
            .map_err(map_order_err)?;
        self.inner
            .get(id.clone())
            .await
            .map_err(map_order_err)?
            .ok_or(OrderError::NotFound(id))
    }

    /// Customer return request; only valid on a completed order.
    #[instrument(skip(self))]
    pub async fn initiate_return(&self, id: String, user_id: String) -> Result<Order, OrderError> {
        let order = self
            .get_order_for_user(id.clone(), user_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        self.inner
            .perform_action(order.id.clone(), OrderAction::InitiateReturn)
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => OrderError::ValidationError(msg),
                other => map_order_err(other),
            })?;

        self.inner
            .get(id.clone())
            .await
            .map_err(map_order_err)?
            .ok_or(OrderError::NotFound(id))
    }
}

pub(crate) fn map_order_err(e: FrameworkError) -> OrderError {
    match e {
        FrameworkError::NotFound(id) => OrderError::NotFound(id),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}
