use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ItemId, UserId, UserItemId};

/// Watchlist entry: `user_id` follows `item_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserItem {
    pub id: UserItemId,
    pub user_id: UserId,
    pub item_id: ItemId,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`UserItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUserItem {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub created_at: NaiveDateTime,
}
