use actix_web::{web, HttpResponse, Responder};

use crate::api::error_response;
use crate::database::MongoDB;
use crate::models::{CreatePostRequest, DocId, PostResponse, UpdatePostRequest};
use crate::services::post_service;

/// GET /posts - Lista todos os posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts", body = [PostResponse])
    )
)]
pub async fn get_posts(db: web::Data<MongoDB>) -> impl Responder {
    match post_service::list_posts(&db).await {
        Ok(posts) => {
            let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
            HttpResponse::Ok().json(posts)
        }
        Err(e) => {
            log::error!("❌ Error listing posts: {}", e);
            error_response(e)
        }
    }
}

/// POST /posts - Cria um novo post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Malformed owner id or payload")
    )
)]
pub async fn create_post(
    db: web::Data<MongoDB>,
    request: web::Json<CreatePostRequest>,
) -> impl Responder {
    match post_service::create_post(&db, request.into_inner()).await {
        Ok(post) => {
            log::info!("✅ Post created: {}", post.id.map(|id| id.to_hex()).unwrap_or_default());
            HttpResponse::Created().json(PostResponse::from(post))
        }
        Err(e) => {
            log::warn!("⚠️ Failed to create post: {}", e);
            error_response(e)
        }
    }
}

/// GET /post/{id} - Busca um post pelo id
#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id (hex)")),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match post_service::get_post(&db, &id).await {
        Ok(post) => HttpResponse::Ok().json(PostResponse::from(post)),
        Err(e) => error_response(e),
    }
}

/// PUT /post/{id} - Atualiza post_body/img de um post
#[utoipa::path(
    put,
    path = "/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id (hex)")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Malformed id or payload"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn update_post(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    request: web::Json<UpdatePostRequest>,
) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match post_service::update_post(&db, &id, request.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(PostResponse::from(post)),
        Err(e) => {
            log::warn!("⚠️ Failed to update post {}: {}", id, e);
            error_response(e)
        }
    }
}

/// DELETE /post/{id} - Remove um post
#[utoipa::path(
    delete,
    path = "/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id (hex)")),
    responses(
        (status = 200, description = "Deleted post", body = PostResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match post_service::delete_post(&db, &id).await {
        Ok(post) => {
            log::info!("🗑️  Post deleted: {}", id);
            HttpResponse::Ok().json(PostResponse::from(post))
        }
        Err(e) => error_response(e),
    }
}
