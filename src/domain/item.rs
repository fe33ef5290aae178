use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageUrl, ItemId, ItemRating, ItemTitle, ItemUrl, PriceAmount};

/// A tracked product, identified primarily by its url.
///
/// Only `url` is required; the descriptive fields stay empty until something
/// fills them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: Option<ItemTitle>,
    pub rating: Option<ItemRating>,
    pub price: Option<PriceAmount>,
    pub url: ItemUrl,
    pub image: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub title: Option<ItemTitle>,
    pub rating: Option<ItemRating>,
    pub price: Option<PriceAmount>,
    pub url: ItemUrl,
    pub image: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}

impl NewItem {
    /// An item known only by its url.
    pub fn from_url(url: ItemUrl, created_at: NaiveDateTime) -> Self {
        Self {
            title: None,
            rating: None,
            price: None,
            url,
            image: None,
            created_at,
        }
    }
}
