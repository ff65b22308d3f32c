use actix_web::{web, HttpResponse, Responder};

use crate::api::error_response;
use crate::database::MongoDB;
use crate::models::{
    CreateUserRequest, DeleteUserResponse, DocId, UpdateUserRequest, UserResponse,
};
use crate::services::user_service;

/// GET /users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> impl Responder {
    match user_service::list_users(&db).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            error_response(e)
        }
    }
}

/// POST /users - Cria um novo usuário (valida email e unicidade)
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid email or duplicate email/username")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    request: web::Json<CreateUserRequest>,
) -> impl Responder {
    match user_service::create_user(&db, request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.username);
            HttpResponse::Created().json(UserResponse::from(user))
        }
        Err(e) => {
            log::warn!("⚠️ Failed to create user: {}", e);
            error_response(e)
        }
    }
}

/// GET /user/{id} - Busca um usuário pelo id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (hex)")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match user_service::get_user(&db, &id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => error_response(e),
    }
}

/// PUT /user/{id} - Atualiza o username de um usuário
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (hex)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed id or payload"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match user_service::update_user(&db, &id, request.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => {
            log::warn!("⚠️ Failed to update user {}: {}", id, e);
            error_response(e)
        }
    }
}

/// DELETE /user/{id} - Remove o usuário e todos os posts dele
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (hex)")),
    responses(
        (status = 200, description = "Deleted user plus count of deleted posts", body = DeleteUserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Cascade failure, user left in place")
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = match DocId::parse(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match user_service::delete_user(&db, &id).await {
        Ok((user, deleted_posts)) => {
            log::info!("🗑️  User {} deleted ({} posts removed)", id, deleted_posts);
            HttpResponse::Ok().json(DeleteUserResponse {
                deleted_user: UserResponse::from(user),
                deleted_posts,
            })
        }
        Err(e) => {
            log::error!("❌ Error deleting user {}: {}", id, e);
            error_response(e)
        }
    }
}
