fn main() {
    let method = |name: &str, route: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route)
            .input_type(format!("crate::rpc::{input}"))
            .output_type(format!("crate::rpc::{output}"))
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = tonic_build::manual::Service::builder()
        .name("PostStore")
        .package("feed.store")
        .method(method(
            "list_posts_by_owner",
            "ListPostsByOwner",
            "ListPostsRequest",
            "ListPostsResponse",
        ))
        .method(method(
            "create_post",
            "CreatePost",
            "CreatePostRequest",
            "PostMessage",
        ))
        .method(method(
            "update_post",
            "UpdatePost",
            "UpdatePostRequest",
            "PostMessage",
        ))
        .method(method(
            "delete_post",
            "DeletePost",
            "DeletePostRequest",
            "DeletePostResponse",
        ))
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
