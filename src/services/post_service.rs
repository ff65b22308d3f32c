use futures::stream::StreamExt;
use lazy_static::lazy_static;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use tokio::sync::Mutex;

use crate::database::MongoDB;
use crate::models::{CreatePostRequest, DocId, Post, UpdatePostRequest};
use crate::utils::error::AppError;

const COLLECTION: &str = "posts";

lazy_static! {
    // Serializes list reads of the posts collection; single-document
    // operations go straight to the store
    static ref LIST_LOCK: Mutex<()> = Mutex::new(());
}

pub async fn list_posts(db: &MongoDB) -> Result<Vec<Post>, AppError> {
    let _guard = LIST_LOCK.lock().await;

    let collection = db.collection::<Post>(COLLECTION);
    let mut cursor = collection.find(doc! {}).await?;

    let mut posts = Vec::new();
    while let Some(result) = cursor.next().await {
        posts.push(result?);
    }

    Ok(posts)
}

pub async fn create_post(db: &MongoDB, request: CreatePostRequest) -> Result<Post, AppError> {
    // The owning user id is parsed but not revalidated against the users
    // collection
    let user_id = DocId::parse(&request.user_id)?;

    let mut post = Post {
        id: None,
        user_id,
        post_body: request.post_body,
        img: request.img,
    };

    let collection = db.collection::<Post>(COLLECTION);
    let result = collection.insert_one(&post).await?;

    let oid = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Failed to retrieve ID for the new post".to_string()))?;
    post.id = Some(oid.into());

    Ok(post)
}

pub async fn get_post(db: &MongoDB, id: &DocId) -> Result<Post, AppError> {
    let collection = db.collection::<Post>(COLLECTION);

    collection
        .find_one(doc! { "_id": id.as_object_id() })
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

pub async fn update_post(
    db: &MongoDB,
    id: &DocId,
    request: UpdatePostRequest,
) -> Result<Post, AppError> {
    let mut set = Document::new();
    if let Some(post_body) = request.post_body {
        set.insert("post_body", post_body);
    }
    if let Some(img) = request.img {
        set.insert("img", img);
    }

    // Nothing to change: behave as a read
    if set.is_empty() {
        return get_post(db, id).await;
    }

    let collection = db.collection::<Post>(COLLECTION);

    collection
        .find_one_and_update(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

pub async fn delete_post(db: &MongoDB, id: &DocId) -> Result<Post, AppError> {
    let collection = db.collection::<Post>(COLLECTION);

    collection
        .find_one_and_delete(doc! { "_id": id.as_object_id() })
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

/// Removes every post owned by `user_id`, returning how many were deleted
pub async fn delete_posts_for_user(db: &MongoDB, user_id: &DocId) -> Result<u64, AppError> {
    let collection = db.collection::<Post>(COLLECTION);

    let result = collection
        .delete_many(doc! { "user_id": user_id.as_object_id() })
        .await?;

    Ok(result.deleted_count)
}
