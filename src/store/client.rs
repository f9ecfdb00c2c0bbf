//! Connection-scoped handle to the post store.

use thiserror::Error;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tracing::{debug, info};

use crate::rpc::{
    CreatePostRequest, DeletePostRequest, DeletePostResponse, ListPostsRequest,
    ListPostsResponse, PostMessage, PostStoreClient, UpdatePostRequest,
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The store could not be dialed.
    #[error("post store unavailable at {endpoint}: {source}")]
    Unavailable {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
    /// The store answered with an error status.
    #[error("post store error: {}", .0.message())]
    Remote(#[from] Status),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Remote(s) if s.code() == tonic::Code::NotFound)
    }
}

/// Owns one transport connection to the store.
///
/// Calls clone the generated client, which shares the underlying channel, so
/// the handle can be used from many tasks at once through `&self`.
#[derive(Clone)]
pub struct StoreClient {
    endpoint: String,
    inner: PostStoreClient<Channel>,
}

impl StoreClient {
    /// Dial `endpoint` (e.g. `"http://127.0.0.1:50051"`).
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        let unavailable = |source: tonic::transport::Error| ClientError::Unavailable {
            endpoint: endpoint.clone(),
            source,
        };

        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(unavailable)?
            .connect()
            .await
            .map_err(unavailable)?;

        info!(endpoint = %endpoint, "connected to post store");
        Ok(Self {
            inner: PostStoreClient::new(channel),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn list_posts_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<ListPostsResponse, ClientError> {
        let mut client = self.inner.clone();
        let resp = client
            .list_posts_by_owner(ListPostsRequest {
                owner_id: owner_id.to_string(),
            })
            .await?;
        Ok(resp.into_inner())
    }

    pub async fn create_post(
        &self,
        owner_id: &str,
        content: &str,
    ) -> Result<PostMessage, ClientError> {
        let mut client = self.inner.clone();
        let resp = client
            .create_post(CreatePostRequest {
                owner_id: owner_id.to_string(),
                content: content.to_string(),
            })
            .await?;
        Ok(resp.into_inner())
    }

    pub async fn update_post(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<PostMessage, ClientError> {
        let mut client = self.inner.clone();
        let resp = client
            .update_post(UpdatePostRequest {
                post_id: post_id.to_string(),
                content: content.to_string(),
            })
            .await?;
        Ok(resp.into_inner())
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<DeletePostResponse, ClientError> {
        let mut client = self.inner.clone();
        let resp = client
            .delete_post(DeletePostRequest {
                post_id: post_id.to_string(),
            })
            .await?;
        Ok(resp.into_inner())
    }

    /// Release this handle's connection. The transport closes once no clone
    /// of the handle remains.
    pub fn close(self) {
        debug!(endpoint = %self.endpoint, "closing post store client");
        drop(self.inner);
    }
}
