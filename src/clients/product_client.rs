use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, ProductFilter};
use tracing::{debug, instrument};

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => ProductError::ValidationError(msg),
            other => map_product_err(other),
        })
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => ProductError::ValidationError(msg),
            other => map_product_err(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list(filter).await.map_err(map_product_err)
    }

    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<(), ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
        {
            Ok(ProductActionResult::Reserved) => Ok(()),
            Err(FrameworkError::Rejected(msg)) => Err(ProductError::InsufficientStock(msg)),
            Err(other) => Err(map_product_err(other)),
        }
    }
}
