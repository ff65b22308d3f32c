use serde::{Deserialize, Serialize};

use crate::models::DocId;

/// Post (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,

    /// ID do usuário dono do post
    pub user_id: DocId,

    /// Corpo do post
    pub post_body: String,

    /// Referência da imagem (URL ou path)
    pub img: String,
}

/// Request para criar post
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub post_body: String,
    pub img: String,
}

/// Request para atualizar post (campos parciais)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePostRequest {
    pub post_body: Option<String>,
    pub img: Option<String>,
}

/// Response de post (ids em formato hex)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub post_body: String,
    pub img: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: post.user_id.to_hex(),
            post_body: post.post_body,
            img: post.img,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_hex_ids() {
        let post = Post {
            id: Some(DocId::parse("507f1f77bcf86cd799439011").unwrap()),
            user_id: DocId::parse("507f191e810c19729de860ea").unwrap(),
            post_body: "hello".to_string(),
            img: "img.png".to_string(),
        };

        let response = PostResponse::from(post);
        assert_eq!(response.id, "507f1f77bcf86cd799439011");
        assert_eq!(response.user_id, "507f191e810c19729de860ea");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["post_body"], "hello");
    }
}
