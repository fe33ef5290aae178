use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::TypeConstraintError;
use crate::domain::user_item::{NewUserItem as DomainNewUserItem, UserItem as DomainUserItem};

/// Diesel model representing a row in the `user_items` join table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_items)]
pub struct UserItem {
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`UserItem`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_items)]
pub struct NewUserItem {
    pub user_id: i32,
    pub item_id: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<UserItem> for DomainUserItem {
    type Error = TypeConstraintError;

    fn try_from(user_item: UserItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user_item.id.try_into()?,
            user_id: user_item.user_id.try_into()?,
            item_id: user_item.item_id.try_into()?,
            created_at: user_item.created_at,
        })
    }
}

impl From<&DomainNewUserItem> for NewUserItem {
    fn from(user_item: &DomainNewUserItem) -> Self {
        Self {
            user_id: user_item.user_id.get(),
            item_id: user_item.item_id.get(),
            created_at: user_item.created_at,
        }
    }
}
