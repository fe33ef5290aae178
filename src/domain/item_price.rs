use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ItemId, ItemPriceId, PriceAmount};

/// One observation in an item's price history. Rows are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPrice {
    pub id: ItemPriceId,
    pub item_id: ItemId,
    pub price: PriceAmount,
    pub created_at: NaiveDateTime,
}

/// Information required to append a new [`ItemPrice`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItemPrice {
    pub item_id: ItemId,
    pub price: PriceAmount,
    pub created_at: NaiveDateTime,
}
