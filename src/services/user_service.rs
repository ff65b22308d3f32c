use futures::stream::StreamExt;
use lazy_static::lazy_static;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use tokio::sync::Mutex;

use crate::database::MongoDB;
use crate::models::{CreateUserRequest, DocId, UpdateUserRequest, User};
use crate::services::post_service;
use crate::utils::error::AppError;
use crate::utils::validation;

const COLLECTION: &str = "users";

lazy_static! {
    // Serializes list reads of the users collection
    static ref LIST_LOCK: Mutex<()> = Mutex::new(());
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let _guard = LIST_LOCK.lock().await;

    let collection = db.collection::<User>(COLLECTION);
    let mut cursor = collection.find(doc! {}).await?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        users.push(result?);
    }

    Ok(users)
}

pub async fn create_user(db: &MongoDB, request: CreateUserRequest) -> Result<User, AppError> {
    validation::validate_new_user(db, &request.username, &request.email).await?;

    let mut user = User {
        id: None,
        username: request.username,
        email: request.email,
        password: request.password,
    };

    let collection = db.collection::<User>(COLLECTION);
    let result = collection.insert_one(&user).await?;

    let oid = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Failed to retrieve ID for the new user".to_string()))?;
    user.id = Some(oid.into());

    Ok(user)
}

pub async fn get_user(db: &MongoDB, id: &DocId) -> Result<User, AppError> {
    let collection = db.collection::<User>(COLLECTION);

    collection
        .find_one(doc! { "_id": id.as_object_id() })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn update_user(
    db: &MongoDB,
    id: &DocId,
    request: UpdateUserRequest,
) -> Result<User, AppError> {
    let username = match request.username {
        Some(username) => username,
        // Nothing to change: behave as a read
        None => return get_user(db, id).await,
    };

    let collection = db.collection::<User>(COLLECTION);

    collection
        .find_one_and_update(
            doc! { "_id": id.as_object_id() },
            doc! { "$set": { "username": username } },
        )
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Cascade delete: removes the user and every post owned by them.
///
/// Two store operations, no transaction. Dependent posts go first; a
/// failure after that point leaves the user in place with zero posts,
/// never posts without an owner.
pub async fn delete_user(db: &MongoDB, id: &DocId) -> Result<(User, u64), AppError> {
    let collection = db.collection::<User>(COLLECTION);
    let filter = doc! { "_id": id.as_object_id() };

    let user = collection
        .find_one(filter.clone())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let deleted_posts = post_service::delete_posts_for_user(db, id).await?;

    collection.delete_one(filter).await?;

    Ok((user, deleted_posts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreatePostRequest;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/blog_test".to_string());
        MongoDB::new(&uri).await.expect("test MongoDB")
    }

    fn unique_suffix() -> String {
        DocId::new().to_hex()
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_duplicate_email_is_rejected() {
        let db = test_db().await;
        let suffix = unique_suffix();

        let first = create_user(
            &db,
            CreateUserRequest {
                username: format!("alice_{}", suffix),
                email: format!("alice_{}@example.com", suffix),
                password: "pw".to_string(),
            },
        )
        .await
        .unwrap();

        let err = create_user(
            &db,
            CreateUserRequest {
                username: format!("alice2_{}", suffix),
                email: format!("alice_{}@example.com", suffix),
                password: "pw".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));

        delete_user(&db, &first.id.unwrap()).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_invalid_email_is_rejected_before_insert() {
        let db = test_db().await;

        let err = create_user(
            &db,
            CreateUserRequest {
                username: format!("bob_{}", unique_suffix()),
                email: "not-an-email".to_string(),
                password: "pw".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_cascade_delete_removes_owned_posts() {
        let db = test_db().await;
        let suffix = unique_suffix();

        let user = create_user(
            &db,
            CreateUserRequest {
                username: format!("carol_{}", suffix),
                email: format!("carol_{}@example.com", suffix),
                password: "pw".to_string(),
            },
        )
        .await
        .unwrap();
        let user_id = user.id.unwrap();

        for body in ["one", "two"] {
            post_service::create_post(
                &db,
                CreatePostRequest {
                    user_id: user_id.to_hex(),
                    post_body: body.to_string(),
                    img: String::new(),
                },
            )
            .await
            .unwrap();
        }

        let (deleted, deleted_posts) = delete_user(&db, &user_id).await.unwrap();
        assert_eq!(deleted.id, Some(user_id));
        assert_eq!(deleted_posts, 2);

        let err = get_user(&db, &user_id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let remaining = post_service::list_posts(&db).await.unwrap();
        assert!(!remaining.iter().any(|p| p.user_id == user_id));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_changes_username_only() {
        let db = test_db().await;
        let suffix = unique_suffix();

        let user = create_user(
            &db,
            CreateUserRequest {
                username: format!("dave_{}", suffix),
                email: format!("dave_{}@example.com", suffix),
                password: "pw".to_string(),
            },
        )
        .await
        .unwrap();
        let user_id = user.id.unwrap();

        let updated = update_user(
            &db,
            &user_id,
            UpdateUserRequest {
                username: Some(format!("dave_renamed_{}", suffix)),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.username, format!("dave_renamed_{}", suffix));
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.password, user.password);

        delete_user(&db, &user_id).await.unwrap();
    }
}
