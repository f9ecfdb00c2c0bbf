use crate::rpc::{DeletePostResponse, PostMessage};
use crate::store::{ClientError, StoreClient};

/// Where the timeline gets posts from.
///
/// `StoreClient` is the production implementation; tests plug in stubs that
/// fail or stall for chosen owners.
#[tonic::async_trait]
pub trait PostSource: Send + Sync + 'static {
    async fn list_posts_by_owner(&self, owner_id: &str) -> Result<Vec<PostMessage>, ClientError>;

    async fn create_post(&self, owner_id: &str, content: &str)
        -> Result<PostMessage, ClientError>;

    async fn update_post(&self, post_id: &str, content: &str) -> Result<PostMessage, ClientError>;

    async fn delete_post(&self, post_id: &str) -> Result<DeletePostResponse, ClientError>;
}

#[tonic::async_trait]
impl PostSource for StoreClient {
    async fn list_posts_by_owner(&self, owner_id: &str) -> Result<Vec<PostMessage>, ClientError> {
        Ok(StoreClient::list_posts_by_owner(self, owner_id).await?.posts)
    }

    async fn create_post(
        &self,
        owner_id: &str,
        content: &str,
    ) -> Result<PostMessage, ClientError> {
        StoreClient::create_post(self, owner_id, content).await
    }

    async fn update_post(&self, post_id: &str, content: &str) -> Result<PostMessage, ClientError> {
        StoreClient::update_post(self, post_id, content).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<DeletePostResponse, ClientError> {
        StoreClient::delete_post(self, post_id).await
    }
}
