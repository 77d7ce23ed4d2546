use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::cart_actor::{CartError, CartFilter};
use crate::clients::ProductClient;
use crate::domain::{CartItem, CartItemCreate, CartItemPatch};
use tracing::{debug, instrument, warn};

/// Client for the cart collection.
///
/// Holds a [`ProductClient`] because adding to the cart validates the product
/// and its size against the catalog before inserting a row.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
    product_client: ProductClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>, product_client: ProductClient) -> Self {
        Self {
            inner,
            product_client,
        }
    }

    /// Adds a product+size to the user's cart, merging into an existing row.
    ///
    /// Two concurrent adds of the same row can still produce two rows; the
    /// merge is a read-then-write, last write wins.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        user_id: String,
        product_id: String,
        size: String,
        quantity: u32,
    ) -> Result<CartItem, CartError> {
        if quantity == 0 {
            return Err(CartError::ValidationError(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let product = self
            .product_client
            .get_product(product_id.clone())
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| CartError::ValidationError(format!("Unknown product: {}", product_id)))?;

        if !product.offers_size(&size) {
            return Err(CartError::ValidationError(format!(
                "Product {} is not offered in size '{}'",
                product_id, size
            )));
        }

        let existing = self
            .inner
            .list(CartFilter::ByUserProductSize {
                user_id: user_id.clone(),
                product_id: product_id.clone(),
                size: size.clone(),
            })
            .await
            .map_err(map_cart_item_err)?;

        if let Some(row) = existing.into_iter().next() {
            debug!(row_id = %row.id, "Merging quantity into existing cart row");
            return self
                .inner
                .update(
                    row.id,
                    CartItemPatch {
                        quantity: row.quantity + quantity,
                    },
                )
                .await
                .map_err(map_cart_item_err);
        }

        let id = self
            .inner
            .create(CartItemCreate {
                user_id,
                product_id,
                size,
                quantity,
            })
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => CartError::ValidationError(msg),
                other => map_cart_item_err(other),
            })?;

        self.inner
            .get(id.clone())
            .await
            .map_err(map_cart_item_err)?
            .ok_or(CartError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: String) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.inner
            .list(CartFilter::ByUser(user_id))
            .await
            .map_err(map_cart_item_err)
    }

    /// Change a row's quantity. Rows belonging to other users read as absent.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: String,
        user_id: String,
        quantity: u32,
    ) -> Result<CartItem, CartError> {
        let row = self.owned_row(id, &user_id).await?;
        self.inner
            .update(row.id, CartItemPatch { quantity })
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => CartError::ValidationError(msg),
                other => map_cart_item_err(other),
            })
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: String, user_id: String) -> Result<(), CartError> {
        let row = self.owned_row(id, &user_id).await?;
        self.inner.delete(row.id).await.map_err(map_cart_item_err)
    }

    /// Empties the user's cart after checkout. Rows that fail to delete are
    /// logged and skipped; there is no rollback of the order.
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: String) -> Result<(), CartError> {
        let rows = self.list_for_user(user_id).await?;
        for row in rows {
            if let Err(e) = self.inner.delete(row.id.clone()).await {
                warn!(row_id = %row.id, error = %e, "Failed to delete cart row during clear");
            }
        }
        Ok(())
    }

    async fn owned_row(&self, id: String, user_id: &str) -> Result<CartItem, CartError> {
        match self.inner.get(id.clone()).await.map_err(map_cart_item_err)? {
            Some(row) if row.user_id == user_id => Ok(row),
            _ => Err(CartError::NotFound(id)),
        }
    }
}

pub(crate) fn map_cart_item_err(e: FrameworkError) -> CartError {
    match e {
        FrameworkError::NotFound(id) => CartError::NotFound(id),
        other => CartError::ActorCommunicationError(other.to_string()),
    }
}
