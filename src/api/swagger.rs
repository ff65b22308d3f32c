use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "CRUD API for blog posts and users backed by MongoDB.\n\n**Features:**\n- Posts: create, list, fetch, update, delete\n- Users: create (email + uniqueness validation), list, fetch, update, cascade delete\n- Health monitoring and metrics",
        contact(
            name = "Blog Service Team",
            email = "support@blog-service.com"
        )
    ),
    paths(
        // Posts
        crate::api::posts::get_posts,
        crate::api::posts::create_post,
        crate::api::posts::get_post,
        crate::api::posts::update_post,
        crate::api::posts::delete_post,

        // Users
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Posts
            crate::models::post::CreatePostRequest,
            crate::models::post::UpdatePostRequest,
            crate::models::post::PostResponse,

            // Users
            crate::models::user::CreateUserRequest,
            crate::models::user::UpdateUserRequest,
            crate::models::user::UserResponse,
            crate::models::user::DeleteUserResponse,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Posts", description = "Blog post CRUD endpoints."),
        (name = "Users", description = "User CRUD endpoints. Deleting a user also deletes that user's posts."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
