use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{RecycledProduct, RecycledProductCreate, RecycledProductPatch};
use crate::recycled_actor::{RecycledError, RecycledFilter};
use tracing::{debug, instrument};

/// Client for the recycle marketplace.
#[derive(Clone)]
pub struct RecycledClient {
    inner: ResourceClient<RecycledProduct>,
}

impl RecycledClient {
    pub fn new(inner: ResourceClient<RecycledProduct>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(seller_id = %params.seller_id))]
    pub async fn create_listing(
        &self,
        params: RecycledProductCreate,
    ) -> Result<RecycledProduct, RecycledError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => RecycledError::ValidationError(msg),
            other => map_recycled_err(other),
        })?;
        self.inner
            .get(id.clone())
            .await
            .map_err(map_recycled_err)?
            .ok_or(RecycledError::NotFound(id))
    }

    /// The open marketplace: public listings only.
    #[instrument(skip(self))]
    pub async fn list_public(&self) -> Result<Vec<RecycledProduct>, RecycledError> {
        debug!("Sending request");
        self.inner
            .list(RecycledFilter::PublicOnly)
            .await
            .map_err(map_recycled_err)
    }

    #[instrument(skip(self))]
    pub async fn list_for_seller(
        &self,
        seller_id: String,
    ) -> Result<Vec<RecycledProduct>, RecycledError> {
        debug!("Sending request");
        self.inner
            .list(RecycledFilter::BySeller(seller_id))
            .await
            .map_err(map_recycled_err)
    }

    /// Seller-scoped update; someone else's listing reads as absent.
    #[instrument(skip(self, patch))]
    pub async fn update_for_seller(
        &self,
        id: String,
        seller_id: String,
        patch: RecycledProductPatch,
    ) -> Result<RecycledProduct, RecycledError> {
        let listing = self.owned_listing(id, &seller_id).await?;
        self.inner
            .update(listing.id, patch)
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => RecycledError::ValidationError(msg),
                other => map_recycled_err(other),
            })
    }

    #[instrument(skip(self))]
    pub async fn delete_for_seller(&self, id: String, seller_id: String) -> Result<(), RecycledError> {
        let listing = self.owned_listing(id, &seller_id).await?;
        self.inner.delete(listing.id).await.map_err(map_recycled_err)
    }

    async fn owned_listing(
        &self,
        id: String,
        seller_id: &str,
    ) -> Result<RecycledProduct, RecycledError> {
        match self.inner.get(id.clone()).await.map_err(map_recycled_err)? {
            Some(listing) if listing.seller_id == seller_id => Ok(listing),
            _ => Err(RecycledError::NotFound(id)),
        }
    }
}

pub(crate) fn map_recycled_err(e: FrameworkError) -> RecycledError {
    match e {
        FrameworkError::NotFound(id) => RecycledError::NotFound(id),
        other => RecycledError::ActorCommunicationError(other.to_string()),
    }
}
