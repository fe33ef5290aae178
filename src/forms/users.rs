use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{ItemId, PasswordHash, UserEmail, UserId};
use crate::domain::user::NewUser;
use crate::domain::user_item::NewUserItem;
use crate::forms::FormError;

/// Payload for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl CreateUserForm {
    /// Validate the payload and build the user row.
    ///
    /// The password goes into `hashed_password` exactly as submitted; nothing
    /// hashes it.
    pub fn into_new_user(self) -> Result<NewUser, FormError> {
        self.validate()?;
        Ok(NewUser {
            email: UserEmail::new(self.email)?,
            hashed_password: PasswordHash::new(self.password)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

/// Payload for `POST /users/{id}/items`.
#[derive(Debug, Deserialize)]
pub struct FollowItemForm {
    pub item_id: i32,
}

impl FollowItemForm {
    pub fn into_new_user_item(self, user_id: UserId) -> Result<NewUserItem, FormError> {
        Ok(NewUserItem {
            user_id,
            item_id: ItemId::new(self.item_id)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_kept_verbatim() {
        let form = CreateUserForm {
            email: "a@b.com".to_string(),
            password: "pw123".to_string(),
        };
        let user = form.into_new_user().unwrap();
        assert_eq!(user.hashed_password.as_str(), "pw123");
    }

    #[test]
    fn surrounding_whitespace_in_password_is_stored() {
        let form = CreateUserForm {
            email: "a@b.com".to_string(),
            password: "  pw123 ".to_string(),
        };
        let user = form.into_new_user().unwrap();
        assert_eq!(user.hashed_password.as_str(), "  pw123 ");
    }

    #[test]
    fn whitespace_only_password_is_accepted() {
        let form = CreateUserForm {
            email: "a@b.com".to_string(),
            password: "   ".to_string(),
        };
        let user = form.into_new_user().unwrap();
        assert_eq!(user.hashed_password.as_str(), "   ");
    }

    #[test]
    fn email_is_not_format_checked() {
        let form = CreateUserForm {
            email: "not-an-email".to_string(),
            password: "pw123".to_string(),
        };
        let user = form.into_new_user().unwrap();
        assert_eq!(user.email.as_str(), "not-an-email");
    }

    #[test]
    fn rejects_empty_email() {
        let form = CreateUserForm {
            email: "".to_string(),
            password: "pw123".to_string(),
        };
        assert!(matches!(
            form.into_new_user(),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_positive_item_id() {
        let form = FollowItemForm { item_id: 0 };
        let user_id = UserId::new(1).unwrap();
        assert!(matches!(
            form.into_new_user_item(user_id),
            Err(FormError::TypeConstraint(_))
        ));
    }
}
