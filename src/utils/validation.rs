use lazy_static::lazy_static;
use mongodb::bson::{doc, Document};
use regex::Regex;

use crate::database::MongoDB;
use crate::utils::error::AppError;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("invalid email regex");
}

/// Checks that an email address matches the basic pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks that no user document already holds `value` in `field`
pub async fn is_unique(db: &MongoDB, field: &str, value: &str) -> Result<(), AppError> {
    let collection = db.collection::<Document>("users");

    match collection.find_one(doc! { field: value }).await {
        Ok(Some(_)) => Err(AppError::InvalidRequest(format!("{} already exists", field))),
        Ok(None) => Ok(()),
        Err(e) => Err(AppError::DatabaseError(e.to_string())),
    }
}

/// Validates a user before insertion: email format, then email and
/// username uniqueness against the users collection.
pub async fn validate_new_user(
    db: &MongoDB,
    username: &str,
    email: &str,
) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::InvalidRequest("invalid email address".to_string()));
    }

    is_unique(db, "email", email).await?;
    is_unique(db, "username", username).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(is_valid_email("u_1%x-y@host.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@host.com"));
        assert!(!is_valid_email("user@host.c"));
        assert!(!is_valid_email("spaces in@host.com"));
    }
}
