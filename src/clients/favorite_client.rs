use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Favorite, FavoriteCreate};
use crate::favorite_actor::{FavoriteError, FavoriteFilter};
use tracing::{debug, instrument};

/// Client for the favorites collection.
#[derive(Clone)]
pub struct FavoriteClient {
    inner: ResourceClient<Favorite>,
}

impl FavoriteClient {
    pub fn new(inner: ResourceClient<Favorite>) -> Self {
        Self { inner }
    }

    /// Pin a product. Re-pinning the same product is a conflict.
    #[instrument(skip(self))]
    pub async fn add(&self, user_id: String, product_id: String) -> Result<Favorite, FavoriteError> {
        debug!("Sending request");
        let existing = self
            .inner
            .list(FavoriteFilter::ByUserProduct {
                user_id: user_id.clone(),
                product_id: product_id.clone(),
            })
            .await
            .map_err(map_favorite_err)?;
        if !existing.is_empty() {
            return Err(FavoriteError::AlreadyExists(product_id));
        }

        let id = self
            .inner
            .create(FavoriteCreate {
                user_id,
                product_id,
            })
            .await
            .map_err(map_favorite_err)?;
        self.inner
            .get(id.clone())
            .await
            .map_err(map_favorite_err)?
            .ok_or(FavoriteError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: String) -> Result<Vec<Favorite>, FavoriteError> {
        debug!("Sending request");
        self.inner
            .list(FavoriteFilter::ByUser(user_id))
            .await
            .map_err(map_favorite_err)
    }

    /// Unpin. Another user's favorite reads as absent.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: String, user_id: String) -> Result<(), FavoriteError> {
        debug!("Sending request");
        match self.inner.get(id.clone()).await.map_err(map_favorite_err)? {
            Some(fav) if fav.user_id == user_id => {
                self.inner.delete(fav.id).await.map_err(map_favorite_err)
            }
            _ => Err(FavoriteError::NotFound(id)),
        }
    }
}

pub(crate) fn map_favorite_err(e: FrameworkError) -> FavoriteError {
    match e {
        FrameworkError::NotFound(id) => FavoriteError::NotFound(id),
        other => FavoriteError::ActorCommunicationError(other.to_string()),
    }
}
