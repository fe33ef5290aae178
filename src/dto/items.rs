use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::item::Item;
use crate::domain::item_price::ItemPrice;

/// One entry of an item's price history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPriceDto {
    pub id: i32,
    pub item_id: i32,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

impl From<ItemPrice> for ItemPriceDto {
    fn from(value: ItemPrice) -> Self {
        Self {
            id: value.id.get(),
            item_id: value.item_id.get(),
            price: value.price.get(),
            created_at: value.created_at,
        }
    }
}

/// An item together with its price history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDto {
    pub id: i32,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<f64>,
    pub url: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub prices: Vec<ItemPriceDto>,
}

impl ItemDto {
    pub fn new(item: Item, prices: Vec<ItemPrice>) -> Self {
        Self {
            id: item.id.get(),
            title: item.title.map(String::from),
            rating: item.rating.map(f64::from),
            price: item.price.map(f64::from),
            url: item.url.into_inner(),
            image: item.image.map(String::from),
            created_at: item.created_at,
            prices: prices.into_iter().map(Into::into).collect(),
        }
    }
}
