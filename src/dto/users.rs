use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::user::User;
use crate::domain::user_item::UserItem;
use crate::dto::items::ItemDto;

/// A user with the items they follow. The stored credential is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<ItemDto>,
}

impl UserDto {
    pub fn new(user: User, items: Vec<ItemDto>) -> Self {
        Self {
            id: user.id.get(),
            email: user.email.into_inner(),
            created_at: user.created_at,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserItemDto {
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<UserItem> for UserItemDto {
    fn from(value: UserItem) -> Self {
        Self {
            id: value.id.get(),
            user_id: value.user_id.get(),
            item_id: value.item_id.get(),
            created_at: value.created_at,
        }
    }
}
