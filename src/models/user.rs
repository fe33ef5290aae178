use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{PasswordHash, TypeConstraintError, UserEmail};
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

/// Diesel model representing a row in the `users` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub hashed_password: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`User`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub hashed_password: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id.try_into()?,
            email: UserEmail::new(user.email)?,
            hashed_password: PasswordHash::new(user.hashed_password)?,
            created_at: user.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            email: user.email.as_str(),
            hashed_password: user.hashed_password.as_str(),
            created_at: user.created_at,
        }
    }
}
