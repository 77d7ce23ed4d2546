use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::comment_actor::{CommentError, CommentFilter};
use crate::domain::{Comment, CommentCreate};
use tracing::{debug, instrument};

/// Client for product comments.
#[derive(Clone)]
pub struct CommentClient {
    inner: ResourceClient<Comment>,
}

impl CommentClient {
    pub fn new(inner: ResourceClient<Comment>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(product_id = %params.product_id))]
    pub async fn add(&self, params: CommentCreate) -> Result<Comment, CommentError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(msg) => CommentError::ValidationError(msg),
            other => CommentError::ActorCommunicationError(other.to_string()),
        })?;
        self.inner
            .get(id.clone())
            .await
            .map_err(|e| CommentError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| CommentError::ActorCommunicationError(format!("Lost comment: {}", id)))
    }

    #[instrument(skip(self))]
    pub async fn list_for_product(&self, product_id: String) -> Result<Vec<Comment>, CommentError> {
        debug!("Sending request");
        self.inner
            .list(CommentFilter::ByProduct(product_id))
            .await
            .map_err(|e| CommentError::ActorCommunicationError(e.to_string()))
    }
}
