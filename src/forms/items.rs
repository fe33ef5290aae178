use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::item::NewItem;
use crate::domain::item_price::NewItemPrice;
use crate::domain::types::{ItemId, ItemUrl, PriceAmount};
use crate::forms::FormError;

/// Payload for `POST /items`. Only the url is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemForm {
    #[validate(url)]
    pub url: String,
}

impl CreateItemForm {
    pub fn into_new_item(self) -> Result<NewItem, FormError> {
        self.validate()?;
        Ok(NewItem::from_url(
            ItemUrl::new(self.url)?,
            Utc::now().naive_utc(),
        ))
    }
}

/// Payload for `POST /items/{id}/prices`.
#[derive(Debug, Deserialize)]
pub struct RecordPriceForm {
    pub price: f64,
}

impl RecordPriceForm {
    pub fn into_new_item_price(self, item_id: ItemId) -> Result<NewItemPrice, FormError> {
        Ok(NewItemPrice {
            item_id,
            price: PriceAmount::new(self.price)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
