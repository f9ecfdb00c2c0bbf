//! gRPC handler for the post store.
//!
//! Translates requests into repository calls and repository results into
//! responses. Holds no state of its own beyond the shared repository.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::repository::SharedRepository;
use crate::rpc::{
    CreatePostRequest, DeletePostRequest, DeletePostResponse, ListPostsRequest,
    ListPostsResponse, PostMessage, PostStore, PostStoreServer, UpdatePostRequest,
};

pub const DELETE_OK_MESSAGE: &str = "Post deleted successfully";

#[derive(Clone)]
pub struct PostStoreService {
    repo: SharedRepository,
}

impl PostStoreService {
    pub fn new(repo: SharedRepository) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &SharedRepository {
        &self.repo
    }
}

fn to_status(err: StoreError) -> Status {
    if err.is_not_found() {
        Status::not_found(err.to_string())
    } else {
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl PostStore for PostStoreService {
    async fn list_posts_by_owner(
        &self,
        request: Request<ListPostsRequest>,
    ) -> Result<Response<ListPostsResponse>, Status> {
        let req = request.into_inner();
        info!(owner_id = %req.owner_id, "listing posts");

        let posts = self.repo.read(&req.owner_id).map_err(to_status)?;
        Ok(Response::new(ListPostsResponse {
            posts: posts.iter().map(PostMessage::from).collect(),
        }))
    }

    async fn create_post(
        &self,
        request: Request<CreatePostRequest>,
    ) -> Result<Response<PostMessage>, Status> {
        let req = request.into_inner();
        info!(owner_id = %req.owner_id, "creating post");

        match self.repo.create(&req.owner_id, &req.content) {
            Ok(post) => Ok(Response::new(PostMessage::from(post))),
            Err(e) => {
                warn!(owner_id = %req.owner_id, error = %e, "create failed");
                Err(to_status(e))
            }
        }
    }

    async fn update_post(
        &self,
        request: Request<UpdatePostRequest>,
    ) -> Result<Response<PostMessage>, Status> {
        let req = request.into_inner();
        info!(post_id = %req.post_id, "updating post");

        match self.repo.update(&req.post_id, &req.content) {
            Ok(post) => Ok(Response::new(PostMessage::from(post))),
            Err(e) => {
                warn!(post_id = %req.post_id, error = %e, "update failed");
                Err(to_status(e))
            }
        }
    }

    /// Repository failures are reported in the response body, not as a status.
    async fn delete_post(
        &self,
        request: Request<DeletePostRequest>,
    ) -> Result<Response<DeletePostResponse>, Status> {
        let req = request.into_inner();
        info!(post_id = %req.post_id, "deleting post");

        let resp = match self.repo.delete(&req.post_id) {
            Ok(success) => DeletePostResponse {
                success,
                message: DELETE_OK_MESSAGE.to_string(),
            },
            Err(e) => {
                warn!(post_id = %req.post_id, error = %e, "delete failed");
                DeletePostResponse {
                    success: false,
                    message: e.to_string(),
                }
            }
        };
        Ok(Response::new(resp))
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Wrap a repository in a `PostStoreServer` to compose with other tonic routes.
pub fn post_store_server(repo: SharedRepository) -> PostStoreServer<PostStoreService> {
    PostStoreServer::new(PostStoreService::new(repo))
}

/// Bind and serve the store at `addr` (e.g. `"127.0.0.1:50051"`).
pub async fn serve(repo: SharedRepository, addr: SocketAddr) -> Result<(), tonic::transport::Error> {
    info!(%addr, "post store listening");
    tonic::transport::Server::builder()
        .add_service(post_store_server(repo))
        .serve(addr)
        .await
}

/// Serve the store on an already-bound listener (port 0 in tests).
pub async fn serve_with_listener(
    repo: SharedRepository,
    listener: TcpListener,
) -> Result<(), tonic::transport::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "post store listening");
    }
    tonic::transport::Server::builder()
        .add_service(post_store_server(repo))
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await
}
