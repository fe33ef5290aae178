use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PasswordHash, UserEmail, UserId};

/// A registered user. Users follow items through [`crate::domain::user_item::UserItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: UserEmail,
    pub hashed_password: PasswordHash,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: UserEmail,
    pub hashed_password: PasswordHash,
    pub created_at: NaiveDateTime,
}
