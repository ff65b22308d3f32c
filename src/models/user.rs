use serde::{Deserialize, Serialize};

use crate::models::DocId;

/// Usuário (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,

    /// Único entre usuários
    pub username: String,

    /// Único entre usuários, formato validado na criação
    pub email: String,

    // TODO: hash passwords before insert (kept plaintext to match the
    // existing collection contents; needs a migration)
    pub password: String,
}

/// Request para criar usuário
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request para atualizar usuário (apenas username é mutável)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
}

/// Response de usuário (id em formato hex)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            password: user.password,
        }
    }
}

/// Response do cascade delete: usuário removido + quantidade de posts removidos
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeleteUserResponse {
    pub deleted_user: UserResponse,
    pub deleted_posts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bson_round_trip_keeps_fields() {
        let user = User {
            id: Some(DocId::new()),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(doc.contains_key("_id"));
        assert_eq!(doc.get_str("username").unwrap(), "alice");

        let back: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back.id, user.id);
        assert_eq!(back.email, "alice@example.com");
    }

    #[test]
    fn test_new_user_omits_id_in_bson() {
        let user = User {
            id: None,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "pw".to_string(),
        };

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(!doc.contains_key("_id"));
    }
}
